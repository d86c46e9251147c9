use super::{DEFAULT_IMAGE, LookupTable, Params, Selector, SelectorError, candidate_keys};
use crate::config::ConfigSource;

/// Selects images from `IMAGE_*` settings of a provider configuration.
#[derive(Debug, Clone)]
pub struct EnvSelector {
    lookup: LookupTable,
}

impl EnvSelector {
    pub fn new(source: &(impl ConfigSource + ?Sized)) -> Self {
        let lookup = LookupTable::build(source);
        tracing::debug!(entries = lookup.len(), "built image lookup table");
        Self { lookup }
    }

    pub fn lookup(&self) -> &LookupTable {
        &self.lookup
    }

    /// Resolve `params` to an image name. Falls back to `"default"`.
    pub fn select(&self, params: &Params) -> String {
        let mut image_name = DEFAULT_IMAGE;

        for key in candidate_keys(params) {
            if key.is_empty() {
                continue;
            }

            if let Some(found) = self.lookup.get(&key) {
                tracing::debug!(key = %key, image = found, "image candidate matched");
                image_name = found;
                break;
            }
        }

        // one level of indirection
        if let Some(aliased) = self.lookup.get(image_name) {
            tracing::debug!(alias = image_name, image = aliased, "image alias resolved");
            return aliased.to_string();
        }

        image_name.to_string()
    }
}

#[async_trait::async_trait]
impl Selector for EnvSelector {
    async fn select(&self, params: &Params) -> Result<String, SelectorError> {
        Ok(EnvSelector::select(self, params))
    }
}

#[cfg(test)]
mod tests {
    use super::EnvSelector;
    use crate::config::ProviderConfig;
    use crate::image::{Params, Selector};
    use std::collections::HashMap;
    use std::sync::Arc;

    fn selector(entries: &[(&str, &str)]) -> EnvSelector {
        let cfg: ProviderConfig = entries.iter().copied().collect();
        EnvSelector::new(&cfg)
    }

    #[test]
    fn empty_config_selects_default() {
        let es = selector(&[]);
        assert_eq!(es.select(&Params::default()), "default");
        assert_eq!(es.select(&Params::new("trusty", "edge", "linux")), "default");
    }

    #[test]
    fn empty_params_use_default_entry() {
        let es = selector(&[("IMAGE_DEFAULT", "travis:base")]);
        assert_eq!(es.select(&Params::default()), "travis:base");
    }

    #[test]
    fn default_entry_goes_through_indirection() {
        let es = selector(&[("IMAGE_DEFAULT", "base"), ("IMAGE_BASE", "travis:base-2024")]);
        assert_eq!(es.select(&Params::default().with_os("freebsd")), "travis:base-2024");
    }

    #[test]
    fn most_specific_match_wins() {
        let es = selector(&[("IMAGE_DIST_TRUSTY_GROUP_FOO", "imgA"), ("IMAGE_TRUSTY", "imgB")]);
        assert_eq!(es.select(&Params::default().with_dist("trusty").with_group("foo")), "imgA");
        assert_eq!(es.select(&Params::default().with_dist("trusty").with_group("bar")), "imgB");
    }

    #[test]
    fn prefixed_form_beats_bare_form() {
        let es = selector(&[("IMAGE_XENIAL", "bare"), ("IMAGE_DIST_XENIAL", "prefixed")]);
        assert_eq!(es.select(&Params::default().with_dist("xenial")), "prefixed");
    }

    #[test]
    fn dist_beats_group_beats_os() {
        let es = selector(&[
            ("IMAGE_OS_LINUX", "by-os"),
            ("IMAGE_GROUP_EDGE", "by-group"),
            ("IMAGE_DIST_BIONIC", "by-dist"),
        ]);

        assert_eq!(es.select(&Params::new("bionic", "edge", "linux")), "by-dist");
        assert_eq!(es.select(&Params::new("focal", "edge", "linux")), "by-group");
        assert_eq!(es.select(&Params::new("focal", "stable", "linux")), "by-os");
    }

    #[test]
    fn combined_bare_key_matches() {
        let es = selector(&[("IMAGE_TRUSTY_EDGE", "combo"), ("IMAGE_DIST_TRUSTY", "dist")]);
        assert_eq!(es.select(&Params::default().with_dist("trusty").with_group("edge")), "combo");
    }

    #[test]
    fn alias_is_followed_once() {
        let cfg: HashMap<String, String> = [("IMAGE_imgAlias", "imgReal"), ("IMAGE_GROUP_BAR", "imgAlias")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let es = EnvSelector::new(&cfg);

        // keys are lowercased, so the alias entry lives under "imgalias"
        assert_eq!(es.select(&Params::default().with_group("bar")), "imgAlias");

        let es = selector(&[("IMAGE_IMGALIAS", "imgReal"), ("IMAGE_GROUP_BAR", "imgalias")]);
        assert_eq!(es.select(&Params::default().with_group("bar")), "imgReal");
    }

    #[test]
    fn alias_chain_is_not_followed() {
        let es = selector(&[
            ("IMAGE_GROUP_BAR", "imgalias"),
            ("IMAGE_IMGALIAS", "imgchain2"),
            ("IMAGE_IMGCHAIN2", "imgchain3"),
        ]);
        assert_eq!(es.select(&Params::default().with_group("bar")), "imgchain2");
    }

    #[test]
    fn self_alias_terminates() {
        let es = selector(&[("IMAGE_DEFAULT", "default")]);
        assert_eq!(es.select(&Params::default()), "default");
    }

    #[test]
    fn power_group_resolves_with_hyphen() {
        let es = selector(&[("IMAGE_GROUP_POWER_SMALL", "travis:ppc64le")]);
        assert_eq!(es.select(&Params::default().with_group("power-small")), "travis:ppc64le");
        assert_eq!(es.select(&Params::default().with_group("power_small")), "default");
    }

    #[test]
    fn uppercase_params_do_not_match_lowercased_keys() {
        let es = selector(&[("IMAGE_OS_OSX", "xcode")]);
        assert_eq!(es.select(&Params::default().with_os("osx")), "xcode");
        assert_eq!(es.select(&Params::default().with_os("OSX")), "default");
    }

    #[tokio::test]
    async fn selector_trait_never_errors() {
        let es: Arc<dyn Selector> = Arc::new(selector(&[("IMAGE_OS_LINUX", "travis:linux")]));

        let image = es.select(&Params::default().with_os("linux")).await.expect("env selection is infallible");
        assert_eq!(image, "travis:linux");

        let shared = Arc::clone(&es);
        let handle = tokio::spawn(async move { shared.select(&Params::default()).await });
        assert_eq!(handle.await.expect("task joined").expect("selection"), "default");
    }
}
