//! networking-sfc parameters and their validated form.

use serde::{Deserialize, Serialize};

use neutron_config_common::overrides::optional_one_or_many;

/// Caller-supplied SFC parameters. Both driver lists default to unset,
/// leaving the choice to the platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SfcParameters {
    #[serde(rename = "sfc_driver", deserialize_with = "optional_one_or_many")]
    pub sfc_drivers: Option<Vec<String>>,
    #[serde(rename = "fc_driver", deserialize_with = "optional_one_or_many")]
    pub fc_drivers: Option<Vec<String>>,
}

/// Validated SFC settings, ready for emission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SfcModel {
    pub sfc_drivers: Option<Vec<String>>,
    pub fc_drivers: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use neutron_config_common::overrides::{from_yaml_str, INLINE_ORIGIN};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_unset() {
        let params: SfcParameters = from_yaml_str("", INLINE_ORIGIN).unwrap();
        assert_eq!(params, SfcParameters::default());
        assert!(params.sfc_drivers.is_none());
        assert!(params.fc_drivers.is_none());
    }

    #[test]
    fn test_yaml_keys() {
        let params: SfcParameters =
            from_yaml_str("sfc_driver: odl_v2\nfc_driver: [odl_v2, ovs]\n", INLINE_ORIGIN).unwrap();
        assert_eq!(params.sfc_drivers, Some(vec!["odl_v2".to_string()]));
        assert_eq!(
            params.fc_drivers,
            Some(vec!["odl_v2".to_string(), "ovs".to_string()])
        );
    }
}
