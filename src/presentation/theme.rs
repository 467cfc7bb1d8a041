use colored::Colorize;

pub struct Theme {
    pub verb: fn(&str) -> String,
    pub label: fn(&str) -> String,
    pub header: fn(&str) -> String,
    pub para: fn(&str) -> String,
    pub line: fn(&str) -> String,
    pub summary: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "classico" | "" => Self::classico(),
            "tricolore" => Self::tricolore(),
            "mono" => Self::mono(),
            _ => {
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::classico()
            }
        }
    }

    fn classico() -> Self {
        Self {
            verb: |s| s.bright_magenta().bold().to_string(),
            label: |s| s.cyan().to_string(),
            header: |s| s.yellow().italic().to_string(),
            para: |s| s.white().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            summary: |s| s.green().to_string(),
        }
    }

    fn tricolore() -> Self {
        Self {
            verb: |s| s.red().bold().underline().to_string(),
            label: |s| s.green().to_string(),
            header: |s| s.green().bold().to_string(),
            para: |s| s.bright_white().to_string(),
            line: |s| s.red().dimmed().to_string(),
            summary: |s| s.bright_white().italic().to_string(),
        }
    }

    /// No styling at all, output is byte-identical to the plain text
    pub fn mono() -> Self {
        Self {
            verb: str::to_string,
            label: str::to_string,
            header: str::to_string,
            para: str::to_string,
            line: str::to_string,
            summary: str::to_string,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mono_is_identity() {
        let theme = Theme::mono();
        for style in [
            theme.verb,
            theme.label,
            theme.header,
            theme.para,
            theme.line,
            theme.summary,
        ] {
            assert_eq!(style("io sono"), "io sono");
        }
    }

    #[test]
    fn test_styled_text_keeps_content() {
        for name in ["classico", "tricolore", "", "sconosciuto"] {
            let theme = Theme::from_name(name);
            assert!((theme.verb)("essere").contains("essere"));
            assert!((theme.para)("ich bin").contains("ich bin"));
        }
    }
}
