use std::collections::HashMap;

/// Key under which hosts store the "show all raw chapters" switch.
pub const SHOW_ALL_RAWS_KEY: &str = "pref_show_all_raws_";
pub const SHOW_ALL_RAWS_DEFAULT: bool = false;

/// Read access to host-owned boolean preferences.
pub trait PreferenceProvider {
    fn get_bool(&self, key: &str, default: bool) -> bool;
}

impl PreferenceProvider for HashMap<String, bool> {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key).copied().unwrap_or(default)
    }
}
