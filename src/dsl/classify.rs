//! Component name classification.
//!
//! Names are matched case-insensitively against a prefix table. Longer
//! prefixes come first so that `Kd` wins over `K` and `LED` over `L`.

use super::ast::ComponentKind;

/// Prefix rules, tested in order. The first match wins.
const RULES: &[(&str, ComponentKind)] = &[
    ("DEL", ComponentKind::Led),
    ("LED", ComponentKind::Led),
    ("KD", ComponentKind::ClosedSwitch),
    ("KO", ComponentKind::OpenSwitch),
    ("K", ComponentKind::OpenSwitch),
    ("U", ComponentKind::Battery),
    ("G", ComponentKind::Battery),
    ("P", ComponentKind::Battery),
    ("R", ComponentKind::Resistor),
    ("L", ComponentKind::Lamp),
    ("M", ComponentKind::Motor),
    ("D", ComponentKind::Diode),
    ("C", ComponentKind::Capacitor),
    ("A", ComponentKind::Ammeter),
    ("V", ComponentKind::Voltmeter),
    ("F", ComponentKind::Fuse),
    ("B", ComponentKind::Buzzer),
];

/// Result of classifying one component name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    /// Resolved component type
    pub kind: ComponentKind,
    /// The name exactly as written
    pub label: String,
    /// False when no rule matched and the default kind was used
    pub resolved: bool,
}

/// Classify a component name token.
pub fn classify(text: &str) -> Classified {
    let rule = RULES
        .iter()
        .find(|(prefix, _)| starts_with_ignore_case(text, prefix));

    Classified {
        kind: rule.map(|(_, kind)| *kind).unwrap_or_default(),
        label: text.to_string(),
        resolved: rule.is_some(),
    }
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.is_char_boundary(prefix.len())
        && text[..prefix.len()].eq_ignore_ascii_case(prefix)
}
