use super::Style;

/// Post-processing applied to every style the slider emits.
///
/// Runs last, after defaults, overrides and fill-parent positioning have been
/// resolved. Closures taking `&mut Style` implement it directly.
pub trait StyleProcessor {
    fn process(&self, style: &mut Style);
}

impl<F> StyleProcessor for F
where
    F: Fn(&mut Style),
{
    fn process(&self, style: &mut Style) {
        self(style)
    }
}

/// Adds vendor-prefixed duplicates of `transform` and `transition`.
#[derive(Debug, Clone)]
pub struct VendorPrefixer {
    prefixes: Vec<&'static str>,
}

impl VendorPrefixer {
    pub fn new(prefixes: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            prefixes: prefixes.into_iter().collect(),
        }
    }
}

impl Default for VendorPrefixer {
    fn default() -> Self {
        Self::new(["-webkit-"])
    }
}

impl StyleProcessor for VendorPrefixer {
    fn process(&self, style: &mut Style) {
        let transform = style.transform.map(|t| t.to_string());
        let transition = style.transition.clone();

        for prefix in &self.prefixes {
            if let Some(transform) = &transform {
                style.set(format!("{prefix}transform"), transform.clone());
            }
            if let Some(transition) = &transition {
                // The transitioned property needs the prefix too
                let value = if transition.property == "transform" {
                    format!(
                        "{prefix}transform {}ms {}",
                        transition.duration_ms, transition.timing
                    )
                } else {
                    transition.to_string()
                };
                style.set(format!("{prefix}transition"), value);
            }
        }
    }
}
