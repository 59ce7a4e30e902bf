use crate::{
    error::CommandError,
    registry::{options_for, OptionDef, OptionKind},
    tool::Tool,
};

/// State of one form field: the checkbox and the text next to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Toggle {
    pub enabled: bool,
    pub value: Option<String>,
}

#[derive(Debug, Clone)]
struct FlagEntry {
    def: &'static OptionDef,
    toggle: Toggle,
}

/// Ordered set of options for one tool, rendered into ` -<name> <value>` pairs.
#[derive(Debug, Clone)]
pub struct FlagSet {
    tool: Tool,
    entries: Vec<FlagEntry>,
}

/// Keystroke validation for decimal entry fields. An empty field is accepted
/// so the user can clear it before typing.
pub fn is_decimal_input(input: &str) -> bool {
    input.is_empty() || input.parse::<f64>().is_ok()
}

impl FlagSet {
    pub fn new(tool: Tool) -> Self {
        let entries = options_for(tool)
            .iter()
            .map(|def| {
                let value = match def.kind {
                    OptionKind::Decimal { default } => Some(default.to_string()),
                    OptionKind::Switch | OptionKind::Choice { .. } => None,
                };
                FlagEntry {
                    def,
                    toggle: Toggle {
                        enabled: def.required,
                        value,
                    },
                }
            })
            .collect();
        Self { tool, entries }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn get(&self, name: &str) -> Option<&Toggle> {
        self.entries
            .iter()
            .find(|e| e.def.name == name)
            .map(|e| &e.toggle)
    }

    fn entry_mut(&mut self, name: &str) -> Result<&mut FlagEntry, CommandError> {
        let tool = self.tool.name();
        self.entries
            .iter_mut()
            .find(|e| e.def.name == name)
            .ok_or_else(|| CommandError::UnknownOption {
                tool,
                option: name.to_string(),
            })
    }

    /// Checks the option. `value` replaces the field contents when given;
    /// choices require one of their listed values.
    pub fn enable(&mut self, name: &str, value: Option<&str>) -> Result<&mut Self, CommandError> {
        let entry = self.entry_mut(name)?;
        if let OptionKind::Choice { options } = entry.def.kind {
            let chosen = value.unwrap_or_default();
            if !options.iter().any(|option| *option == chosen) {
                return Err(CommandError::InvalidChoice {
                    option: name.to_string(),
                    value: chosen.to_string(),
                    allowed: options.to_vec(),
                });
            }
        }
        if let Some(value) = value {
            entry.toggle.value = Some(value.to_string());
        }
        entry.toggle.enabled = true;
        Ok(self)
    }

    /// Sets the option only when `value` is present, leaving it untouched otherwise.
    pub fn enable_if(
        &mut self,
        name: &str,
        value: Option<impl AsRef<str>>,
    ) -> Result<&mut Self, CommandError> {
        match value {
            Some(value) => self.enable(name, Some(value.as_ref())),
            None => Ok(self),
        }
    }

    pub fn enable_switch(&mut self, name: &str, on: bool) -> Result<&mut Self, CommandError> {
        if on {
            self.enable(name, None)
        } else {
            Ok(self)
        }
    }

    /// Unchecks the option. Required options stay enabled.
    pub fn disable(&mut self, name: &str) -> Result<&mut Self, CommandError> {
        let entry = self.entry_mut(name)?;
        if !entry.def.required {
            entry.toggle.enabled = false;
        }
        Ok(self)
    }

    /// Rejects enabled decimal options whose field is empty or not a finite number.
    pub fn validate(&self) -> Result<(), CommandError> {
        for entry in self.entries.iter().filter(|e| e.toggle.enabled) {
            if let OptionKind::Decimal { .. } = entry.def.kind {
                let value = entry.toggle.value.as_deref().unwrap_or_default();
                let valid = value.parse::<f64>().is_ok_and(f64::is_finite);
                if !valid {
                    return Err(CommandError::InvalidValue {
                        option: entry.def.name.to_string(),
                        value: value.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        for entry in self.entries.iter().filter(|e| e.toggle.enabled) {
            match (&entry.def.kind, entry.toggle.value.as_deref()) {
                (OptionKind::Choice { .. }, Some(choice)) => args.push(format!("-{}", choice)),
                (OptionKind::Choice { .. }, None) => {}
                (OptionKind::Switch, _) | (OptionKind::Decimal { .. }, None) => {
                    args.push(format!("-{}", entry.def.name))
                }
                (OptionKind::Decimal { .. }, Some(value)) => {
                    args.push(format!("-{}", entry.def.name));
                    args.push(value.to_string());
                }
            }
        }
        args
    }

    /// The flags as one string, each prefixed by a space.
    pub fn render(&self) -> String {
        self.to_args().iter().fold(String::new(), |mut out, arg| {
            out.push(' ');
            out.push_str(arg);
            out
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_input_validation() {
        assert!(is_decimal_input(""));
        assert!(is_decimal_input("5"));
        assert!(is_decimal_input("0.25"));
        assert!(is_decimal_input("-1.5"));
        assert!(!is_decimal_input("abc"));
        assert!(!is_decimal_input("1.2.3"));
    }

    #[test]
    fn only_step_is_rendered_by_default() {
        let flags = FlagSet::new(Tool::LasGround);
        assert_eq!(flags.render(), " -step 5");
    }

    #[test]
    fn checked_options_render_in_registry_order() {
        let mut flags = FlagSet::new(Tool::LasGround);
        flags
            .enable("spike", Some("0.5"))
            .unwrap()
            .enable("stddev", Some("10"))
            .unwrap()
            .enable("step", Some("3"))
            .unwrap();
        assert_eq!(flags.render(), " -step 3 -stddev 10 -spike 0.5");
    }

    #[test]
    fn unchecked_option_contributes_nothing() {
        let mut flags = FlagSet::new(Tool::LasGround);
        flags.enable("bulge", Some("2")).unwrap();
        flags.disable("bulge").unwrap();
        assert!(!flags.render().contains("-bulge"));
        // the field keeps its contents while unchecked
        assert_eq!(flags.get("bulge").unwrap().value.as_deref(), Some("2"));
    }

    #[test]
    fn enabling_without_value_keeps_default() {
        let mut flags = FlagSet::new(Tool::LasGround);
        flags.enable("offset", None).unwrap();
        assert_eq!(flags.render(), " -step 5 -offset 0");
    }

    #[test]
    fn required_option_cannot_be_disabled() {
        let mut flags = FlagSet::new(Tool::Blast2Dem);
        flags.disable("step").unwrap();
        assert_eq!(flags.render(), " -step 1");
    }

    #[test]
    fn switches_and_choices_render_bare() {
        let mut flags = FlagSet::new(Tool::LasGround);
        flags
            .enable("terrain", Some("town"))
            .unwrap()
            .enable_switch("compute_height", true)
            .unwrap()
            .enable_switch("replace_z", false)
            .unwrap();
        assert_eq!(
            flags.to_args(),
            vec!["-step", "5", "-town", "-compute_height"]
        );
    }

    #[test]
    fn invalid_choice_is_rejected() {
        let mut flags = FlagSet::new(Tool::Blast2Dem);
        let err = flags.enable("product", Some("contours")).unwrap_err();
        assert!(matches!(err, CommandError::InvalidChoice { .. }));
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut flags = FlagSet::new(Tool::LasGround);
        let err = flags.enable("hillshade", None).unwrap_err();
        assert!(matches!(err, CommandError::UnknownOption { tool: "lasground", .. }));
    }

    #[test]
    fn validate_rejects_empty_and_non_finite_values() {
        let mut flags = FlagSet::new(Tool::LasGround);
        flags.enable("step", Some("")).unwrap();
        assert!(matches!(
            flags.validate(),
            Err(CommandError::InvalidValue { ref option, .. }) if option == "step"
        ));

        flags.enable("step", Some("2")).unwrap();
        flags.enable("sub", Some("inf")).unwrap();
        assert!(flags.validate().is_err());

        flags.disable("sub").unwrap();
        assert!(flags.validate().is_ok());
    }

    #[test]
    fn enable_if_skips_missing_values() {
        let mut flags = FlagSet::new(Tool::LasGround);
        flags
            .enable_if("stddev", None::<&str>)
            .unwrap()
            .enable_if("bulge", Some("1.5"))
            .unwrap();
        assert_eq!(flags.render(), " -step 5 -bulge 1.5");
    }
}
