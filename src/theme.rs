use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Parses the stored form. Anything but the exact strings `"light"` and
    /// `"dark"` is not a theme.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// A checked toggle means light.
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn is_light(self) -> bool {
        self == Theme::Light
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[test]
fn test_parse() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(" dark"), None);
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("blue"), None);
}

#[test]
fn test_toggle_mapping() {
    assert_eq!(Theme::from_checked(true), Theme::Light);
    assert_eq!(Theme::from_checked(false), Theme::Dark);
    assert!(Theme::Light.is_light());
    assert!(!Theme::Dark.is_light());
    assert_eq!(Theme::from_prefers_dark(true), Theme::Dark);
    assert_eq!(Theme::from_prefers_dark(false), Theme::Light);
    assert_eq!(Theme::Dark.to_string(), "dark");
}
