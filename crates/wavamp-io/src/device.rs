//! Output device enumeration and lookup via cpal.

use crate::{Error, Result};
use cpal::traits::{DeviceTrait, HostTrait};
use cpal::{Device, Host};

/// Extract device name via `description()` (cpal 0.17+).
pub(crate) fn device_name(device: &Device) -> std::result::Result<String, cpal::DeviceNameError> {
    device.description().map(|d| d.name().to_string())
}

/// Output device information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioDevice {
    /// Human-readable device name.
    pub name: String,
    /// Default sample rate in Hz.
    pub default_sample_rate: u32,
    /// Default channel count.
    pub default_channels: u16,
    /// Whether this is the host's default output.
    pub is_default: bool,
}

fn describe(device: &Device, default_name: Option<&str>) -> Option<AudioDevice> {
    let name = device_name(device).ok()?;
    let (default_sample_rate, default_channels) = device
        .default_output_config()
        .map(|c| (c.sample_rate(), c.channels()))
        .unwrap_or((48000, 2));
    Some(AudioDevice {
        is_default: default_name == Some(name.as_str()),
        name,
        default_sample_rate,
        default_channels,
    })
}

/// List output devices on `host`.
pub(crate) fn list_output_devices(host: &Host) -> Result<Vec<AudioDevice>> {
    let default_name = host.default_output_device().and_then(|d| device_name(&d).ok());
    let devices = host
        .output_devices()
        .map_err(|e| Error::Stream(e.to_string()))?;

    Ok(devices
        .filter_map(|d| describe(&d, default_name.as_deref()))
        .collect())
}

/// The default output device on `host`.
pub(crate) fn default_output_device(host: &Host) -> Result<Option<AudioDevice>> {
    Ok(host.default_output_device().and_then(|d| {
        let mut info = describe(&d, None)?;
        info.is_default = true;
        Some(info)
    }))
}

/// Find an output device by index, exact name, or case-insensitive partial
/// name. `None` selects the host default.
pub(crate) fn find_output_device(host: &Host, selector: Option<&str>) -> Result<Device> {
    let Some(selector) = selector else {
        return host.default_output_device().ok_or(Error::NoDevice);
    };

    let devices: Vec<_> = host
        .output_devices()
        .map_err(|e| Error::Stream(e.to_string()))?
        .collect();

    if let Ok(index) = selector.parse::<usize>() {
        return devices.get(index).cloned().ok_or_else(|| {
            Error::DeviceNotFound(format!(
                "output device index {} (only {} devices available)",
                index,
                devices.len()
            ))
        });
    }

    if let Some(device) = devices
        .iter()
        .find(|d| device_name(d).is_ok_and(|n| n == selector))
    {
        return Ok(device.clone());
    }

    let names: Vec<String> = devices
        .iter()
        .map(|d| device_name(d).unwrap_or_default())
        .collect();
    match match_partial(&names, selector).as_slice() {
        [] => Err(Error::DeviceNotFound(format!(
            "no output device matching '{}'",
            selector
        ))),
        [first, rest @ ..] => {
            if !rest.is_empty() {
                tracing::warn!(
                    selector,
                    using = %names[*first],
                    "selector matches multiple output devices"
                );
            }
            Ok(devices[*first].clone())
        }
    }
}

/// Indices of names containing `search`, case-insensitively.
fn match_partial(names: &[String], search: &str) -> Vec<usize> {
    let search_lower = search.to_lowercase();
    names
        .iter()
        .enumerate()
        .filter(|(_, n)| n.to_lowercase().contains(&search_lower))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_devices() {
        // Device availability depends on the system; this only must not fail.
        assert!(list_output_devices(&cpal::default_host()).is_ok());
    }

    #[test]
    fn test_default_device() {
        assert!(default_output_device(&cpal::default_host()).is_ok());
    }

    #[test]
    fn partial_match_is_case_insensitive() {
        let names = vec![
            "Built-in Output".to_string(),
            "USB Audio CODEC".to_string(),
            "usb headset".to_string(),
        ];
        assert_eq!(match_partial(&names, "usb"), vec![1, 2]);
        assert_eq!(match_partial(&names, "BUILT"), vec![0]);
        assert!(match_partial(&names, "hdmi").is_empty());
    }
}
