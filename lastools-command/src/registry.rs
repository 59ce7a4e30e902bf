//! Declarative option tables for each tool.
//!
//! Every entry maps one form field to one command-line flag. `FlagSet` is
//! built from these tables, so the order here is the order flags appear in
//! the assembled command.

use crate::tool::Tool;

/// Definition of a single command-line option.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionDef {
    pub name: &'static str,
    pub kind: OptionKind,
    /// Options such as `-step` are always passed and cannot be unchecked.
    pub required: bool,
}

/// How an option is rendered on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionKind {
    /// `-name <value>` with a decimal value.
    Decimal { default: &'static str },
    /// Bare `-name`.
    Switch,
    /// Exactly one bare `-<choice>` out of `options`.
    Choice { options: &'static [&'static str] },
}

impl OptionDef {
    const fn decimal(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            kind: OptionKind::Decimal { default },
            required: false,
        }
    }

    const fn switch(name: &'static str) -> Self {
        Self {
            name,
            kind: OptionKind::Switch,
            required: false,
        }
    }

    const fn choice(name: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: OptionKind::Choice { options },
            required: false,
        }
    }

    const fn always(mut self) -> Self {
        self.required = true;
        self
    }

    /// Name of the documentation file describing this option, e.g. `grd_step`.
    pub fn docs_topic(&self, tool: Tool) -> String {
        format!("{}_{}", tool.docs_prefix(), self.name)
    }
}

pub const DEFAULT_GROUND_STEP: &str = "5";
pub const DEFAULT_DEM_STEP: &str = "1";

pub const TERRAIN_PRESETS: &[&str] = &["wilderness", "nature", "town", "city", "metro"];
pub const GRANULARITIES: &[&str] = &["coarse", "fine", "extra_fine", "ultra_fine", "hyper_fine"];
pub const DEM_PRODUCTS: &[&str] = &["elevation", "slope", "intensity", "rgb", "hillshade"];

pub static LASGROUND_OPTIONS: &[OptionDef] = &[
    OptionDef::decimal("step", DEFAULT_GROUND_STEP).always(),
    OptionDef::decimal("stddev", "0"),
    OptionDef::decimal("offset", "0"),
    OptionDef::decimal("bulge", "0"),
    OptionDef::decimal("spike", "0"),
    OptionDef::decimal("sub", "0"),
    OptionDef::choice("terrain", TERRAIN_PRESETS),
    OptionDef::choice("granularity", GRANULARITIES),
    OptionDef::switch("compute_height"),
    OptionDef::switch("replace_z"),
];

pub static BLAST2DEM_OPTIONS: &[OptionDef] = &[
    OptionDef::decimal("step", DEFAULT_DEM_STEP).always(),
    OptionDef::choice("product", DEM_PRODUCTS),
    OptionDef::switch("gray"),
    OptionDef::switch("false"),
    OptionDef::decimal("kill", "100"),
];

pub fn options_for(tool: Tool) -> &'static [OptionDef] {
    match tool {
        Tool::LasView => &[],
        Tool::LasGround => LASGROUND_OPTIONS,
        Tool::Blast2Dem => BLAST2DEM_OPTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique_per_tool() {
        for tool in [Tool::LasGround, Tool::Blast2Dem] {
            let mut names: Vec<_> = options_for(tool).iter().map(|o| o.name).collect();
            let len = names.len();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), len, "duplicate option for {}", tool);
        }
    }

    #[test]
    fn step_is_first_and_required() {
        for tool in [Tool::LasGround, Tool::Blast2Dem] {
            let first = &options_for(tool)[0];
            assert_eq!(first.name, "step");
            assert!(first.required);
        }
    }

    #[test]
    fn docs_topic_uses_tool_prefix() {
        assert_eq!(LASGROUND_OPTIONS[1].docs_topic(Tool::LasGround), "grd_stddev");
        assert_eq!(BLAST2DEM_OPTIONS[0].docs_topic(Tool::Blast2Dem), "dem_step");
    }
}
