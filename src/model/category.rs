/// The three gene-ontology aspects, addressed by their two-letter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoCategory {
    BiologicalProcess,
    MolecularFunction,
    CellularComponent,
}

impl GoCategory {
    pub const ALL: [GoCategory; 3] = [
        GoCategory::BiologicalProcess,
        GoCategory::MolecularFunction,
        GoCategory::CellularComponent,
    ];

    /// Look up a category by its code. Codes are case-sensitive, so `"bp"`
    /// is not a category.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "BP" => Some(GoCategory::BiologicalProcess),
            "MF" => Some(GoCategory::MolecularFunction),
            "CC" => Some(GoCategory::CellularComponent),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            GoCategory::BiologicalProcess => "BP",
            GoCategory::MolecularFunction => "MF",
            GoCategory::CellularComponent => "CC",
        }
    }

    /// The `goAspect` value QuickGO uses for this category.
    pub fn aspect(&self) -> &'static str {
        match self {
            GoCategory::BiologicalProcess => "biological_process",
            GoCategory::MolecularFunction => "molecular_function",
            GoCategory::CellularComponent => "cellular_component",
        }
    }
}

impl std::fmt::Display for GoCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
