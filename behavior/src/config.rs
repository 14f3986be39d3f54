use serde::{Deserialize, Serialize};
use toml;
use tracing::{debug, instrument};

// defaults
//
// these are the values the site shipped with; anything here can be overridden from the
// embedded site.toml without touching the behavior code
pub const SCHOOL_NAME: &str = "Shree Radha Krishna School";

pub const NARROW_BREAKPOINT_PX: f64 = 768.0;

pub const DROPDOWN_CLOSE_DELAY_MS: u32 = 200;

pub const HIGHLIGHT_COLOR: &str = "#f0f8ff";
pub const HIGHLIGHT_DURATION_MS: u32 = 2000;
pub const HIGHLIGHT_TRANSITION: &str = "background-color 0.5s ease";
pub const HIGHLIGHT_TRANSITION_RESET_MS: u32 = 500;

pub const MODAL_FADE_IN_DELAY_MS: u32 = 10;
pub const MODAL_FADE_OUT_MS: u32 = 300;

pub const RIPPLE_DURATION_MS: u32 = 600;

pub const HEADER_ELEVATION_OFFSET_PX: f64 = 100.0;
pub const HEADER_FLAT_SHADOW: &str = "0 2px 5px rgba(0,0,0,0.1)";
pub const HEADER_ELEVATED_SHADOW: &str = "0 4px 20px rgba(0,0,0,0.15)";
pub const HEADER_ELEVATED_BLUR: &str = "blur(10px)";

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const CARD_STAGGER_MS: u32 = 100;

pub const APPLY_MESSAGE: &str = "To Apply for Admission, Please visit our School Campus at H.No. 317/12, Hans Enclave, Near Rajiv Chowk, Gurugram, Haryana";
pub const PHONE_MESSAGE: &str = "Please call on +91-8284959139 or WhatsApp: +91-9041679747";

// site configuration
//
// every timing and threshold used by the controllers lives here.  missing keys fall back
// to the constants above, so a config file only needs to mention what it changes
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub school_name: String,
    pub narrow_breakpoint: f64,

    pub dropdown: DropdownConfig,
    pub highlight: HighlightConfig,
    pub modal: ModalConfig,
    pub header: HeaderConfig,
    pub reveal: RevealConfig,

    pub ripple_duration: u32,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct DropdownConfig {
    pub close_delay: u32,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub color: String,
    pub duration: u32,
    pub transition: String,
    pub transition_reset: u32,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ModalConfig {
    pub fade_in_delay: u32,
    pub fade_out: u32,
    pub apply_message: String,
    pub phone_message: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub elevation_offset: f64,
    pub flat_shadow: String,
    pub elevated_shadow: String,
    pub elevated_blur: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub card_stagger: u32,
}

impl SiteConfig {
    #[instrument(skip(contents))]
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: SiteConfig = toml::from_str(contents)?;

        if !(0.0..=1.0).contains(&config.reveal.threshold) {
            return Err(anyhow::Error::msg(format!(
                "reveal threshold must be within [0, 1], got {}",
                config.reveal.threshold
            )));
        }

        debug!({ breakpoint = config.narrow_breakpoint }, "parsed site config");

        Ok(config)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            school_name: SCHOOL_NAME.to_owned(),
            narrow_breakpoint: NARROW_BREAKPOINT_PX,
            dropdown: DropdownConfig::default(),
            highlight: HighlightConfig::default(),
            modal: ModalConfig::default(),
            header: HeaderConfig::default(),
            reveal: RevealConfig::default(),
            ripple_duration: RIPPLE_DURATION_MS,
        }
    }
}

impl Default for DropdownConfig {
    fn default() -> Self {
        DropdownConfig {
            close_delay: DROPDOWN_CLOSE_DELAY_MS,
        }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            color: HIGHLIGHT_COLOR.to_owned(),
            duration: HIGHLIGHT_DURATION_MS,
            transition: HIGHLIGHT_TRANSITION.to_owned(),
            transition_reset: HIGHLIGHT_TRANSITION_RESET_MS,
        }
    }
}

impl Default for ModalConfig {
    fn default() -> Self {
        ModalConfig {
            fade_in_delay: MODAL_FADE_IN_DELAY_MS,
            fade_out: MODAL_FADE_OUT_MS,
            apply_message: APPLY_MESSAGE.to_owned(),
            phone_message: PHONE_MESSAGE.to_owned(),
        }
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        HeaderConfig {
            elevation_offset: HEADER_ELEVATION_OFFSET_PX,
            flat_shadow: HEADER_FLAT_SHADOW.to_owned(),
            elevated_shadow: HEADER_ELEVATED_SHADOW.to_owned(),
            elevated_blur: HEADER_ELEVATED_BLUR.to_owned(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN.to_owned(),
            card_stagger: CARD_STAGGER_MS,
        }
    }
}
