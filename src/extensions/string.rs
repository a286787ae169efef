pub trait CellText {
    /// Trims surrounding whitespace, then any trailing commas.
    ///
    /// `" BABA, "` becomes `"BABA"`; a lone `","` becomes empty.
    fn trim_cell(&self) -> &str;
}

impl CellText for str {
    fn trim_cell(&self) -> &str {
        self.trim().trim_end_matches(',')
    }
}
