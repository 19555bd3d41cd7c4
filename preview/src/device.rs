use std::fmt;

// device profiles
//
// named viewport presets offered by the device selector.  the sizes are
// reference data for common hardware classes, not something the user edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceKind {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceKind {
    pub const ALL: [DeviceKind; 3] = [DeviceKind::Mobile, DeviceKind::Tablet, DeviceKind::Desktop];

    pub fn label(self) -> &'static str {
        match self {
            DeviceKind::Mobile => "Mobile",
            DeviceKind::Tablet => "Tablet",
            DeviceKind::Desktop => "Desktop",
        }
    }

    pub fn dimensions(self) -> Dimensions {
        match self {
            DeviceKind::Mobile => Dimensions {
                width: 375,
                height: 667,
            },
            DeviceKind::Tablet => Dimensions {
                width: 768,
                height: 1024,
            },
            DeviceKind::Desktop => Dimensions {
                width: 1280,
                height: 800,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    // parse a "WxH" selection from the screen size list.  anything that does
    // not parse cleanly (including the empty "device default" option) means
    // no override rather than an error.
    pub fn parse(value: &str) -> Option<Dimensions> {
        let (w, h) = value.trim().split_once('x')?;

        let width = w.trim().parse().ok()?;
        let height = h.trim().parse().ok()?;

        if width == 0 || height == 0 {
            return None;
        }

        Some(Dimensions { width, height })
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_carry_reference_sizes() {
        assert_eq!(
            DeviceKind::Mobile.dimensions(),
            Dimensions {
                width: 375,
                height: 667
            }
        );
        assert_eq!(
            DeviceKind::Tablet.dimensions(),
            Dimensions {
                width: 768,
                height: 1024
            }
        );
        assert_eq!(
            DeviceKind::Desktop.dimensions(),
            Dimensions {
                width: 1280,
                height: 800
            }
        );
    }

    #[test]
    fn selector_values_parse() {
        assert_eq!(
            Dimensions::parse("800x600"),
            Some(Dimensions {
                width: 800,
                height: 600
            })
        );
        assert_eq!(
            Dimensions::parse(" 1024x768 "),
            Some(Dimensions {
                width: 1024,
                height: 768
            })
        );
    }

    #[test]
    fn malformed_selector_values_mean_no_override() {
        assert_eq!(Dimensions::parse(""), None);
        assert_eq!(Dimensions::parse("800"), None);
        assert_eq!(Dimensions::parse("800x"), None);
        assert_eq!(Dimensions::parse("x600"), None);
        assert_eq!(Dimensions::parse("800xsix"), None);
        assert_eq!(Dimensions::parse("0x600"), None);
        assert_eq!(Dimensions::parse("800x0"), None);
    }

    #[test]
    fn display_uses_multiplication_sign() {
        let dims = DeviceKind::Mobile.dimensions();
        assert_eq!(dims.to_string(), "375×667");
    }
}
