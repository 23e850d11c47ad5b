/// Total typing effort for one text under one layout. Lower is better.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LayoutScore {
    /// Sum of occurrence count × effort weight over every scored
    /// character.
    pub total: f64,

    /// Occurrences whose character has no tier in the layout's table.
    /// They contribute nothing to the total.
    pub unscored: u64,
}
