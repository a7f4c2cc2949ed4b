//! Config form submission — ordered form fields and their urlencoded body.

/// Field values gathered from the config form at submit time.
///
/// Fields keep the order in which they were added (form order). Duplicate
/// names are kept as separate entries, like a browser `FormData`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFormSubmission {
    fields: Vec<(String, String)>,
}

impl ConfigFormSubmission {
    /// Create an empty submission.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field and return the submission (builder style).
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Append a field.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Fields in submission order.
    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Encode as an `application/x-www-form-urlencoded` body.
    ///
    /// Pairs are joined with `&` with no leading or trailing separator.
    #[must_use]
    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| format!("{}={}", encode_component(name), encode_component(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigFormSubmission
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Encode a form name or value the way a browser does for
/// `application/x-www-form-urlencoded`: unreserved characters pass through,
/// space becomes `+` and everything else becomes `%XX`.
fn encode_component(raw: &str) -> String {
    // A literal `%20` in the input is already escaped to `%2520` here.
    urlencoding::encode(raw).replace("%20", "+")
}

/// The oven's config form: target temperature and run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OvenConfig {
    /// Setpoint in °F.
    pub temperature: i32,
    /// Total run time in seconds.
    pub time: i32,
}

impl From<OvenConfig> for ConfigFormSubmission {
    fn from(config: OvenConfig) -> Self {
        Self::new()
            .with_field("temperature", config.temperature.to_string())
            .with_field("time", config.time.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_encode_power_and_setpoint() {
        let form = ConfigFormSubmission::new()
            .with_field("power", "on")
            .with_field("setpoint", "72");
        assert_eq!(form.encode(), "power=on&setpoint=72");
    }

    #[test]
    fn should_encode_empty_form_as_empty_body() {
        assert_eq!(ConfigFormSubmission::new().encode(), "");
    }

    #[test]
    fn should_encode_single_field_without_separator() {
        let form = ConfigFormSubmission::new().with_field("time", "600");
        assert_eq!(form.encode(), "time=600");
    }

    #[test]
    fn should_keep_form_order_and_duplicates() {
        let form: ConfigFormSubmission =
            [("b", "2"), ("a", "1"), ("b", "3"), ("c", "")].into_iter().collect();
        assert_eq!(form.len(), 4);
        assert_eq!(form.encode(), "b=2&a=1&b=3&c=");
    }

    #[test]
    fn should_never_produce_stray_separators() {
        let form: ConfigFormSubmission = (0..10).map(|i| (format!("k{i}"), i.to_string())).collect();
        let body = form.encode();
        assert!(!body.starts_with('&'));
        assert!(!body.ends_with('&'));
        assert!(!body.contains("&&"));
        assert_eq!(body.split('&').count(), 10);
    }

    #[test]
    fn should_escape_reserved_characters() {
        let form = ConfigFormSubmission::new()
            .with_field("note", "a&b=c+e%")
            .with_field("temp °F", "72");
        assert_eq!(form.encode(), "note=a%26b%3Dc%2Be%25&temp+%C2%B0F=72");
    }

    #[test]
    fn should_encode_space_as_plus() {
        let form = ConfigFormSubmission::new().with_field("note", "a b");
        assert_eq!(form.encode(), "note=a+b");
    }

    #[test]
    fn should_keep_literal_percent_twenty_distinct_from_space() {
        let form = ConfigFormSubmission::new().with_field("note", "a%20b c");
        assert_eq!(form.encode(), "note=a%2520b+c");
    }

    #[test]
    fn should_pass_unreserved_characters_through() {
        let form = ConfigFormSubmission::new().with_field("a-b_c.d~e", "Z9");
        assert_eq!(form.encode(), "a-b_c.d~e=Z9");
    }

    #[test]
    fn should_convert_oven_config_in_form_order() {
        let form: ConfigFormSubmission = OvenConfig {
            temperature: 350,
            time: 1200,
        }
        .into();
        assert_eq!(
            form.fields(),
            &[
                ("temperature".to_string(), "350".to_string()),
                ("time".to_string(), "1200".to_string()),
            ]
        );
        assert_eq!(form.encode(), "temperature=350&time=1200");
    }

    #[test]
    fn should_report_empty() {
        assert!(ConfigFormSubmission::new().is_empty());
        assert!(!ConfigFormSubmission::new().with_field("a", "b").is_empty());
    }
}
