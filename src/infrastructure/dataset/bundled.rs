// Dataset compiled into the binary
use crate::domain::error::VerbiError;
use crate::domain::traits::DatasetSource;
use std::borrow::Cow;

static VERBS_JSON: &[u8] = include_bytes!("../../../assets/verbs.json");

pub struct BundledSource;

impl DatasetSource for BundledSource {
    fn name(&self) -> String {
        "verbs.json".to_string()
    }

    fn read(&self) -> Result<Cow<'static, [u8]>, VerbiError> {
        Ok(Cow::Borrowed(VERBS_JSON))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_source_is_not_empty() {
        let bytes = BundledSource.read().unwrap();
        assert!(!bytes.is_empty());
        assert_eq!(BundledSource.name(), "verbs.json");
    }
}
