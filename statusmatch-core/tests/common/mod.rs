use bytes::Bytes;
use statusmatch_core::{BoxCodec, BoxError, Codec, Rule, StatusRange, TypeName};

/// Decodes the body as UTF-8 text tagged with the rule's label.
pub struct Labeled(pub &'static str);

impl Codec<String> for Labeled {
    fn decode(&self, body: &[u8]) -> Result<String, BoxError> {
        Ok(format!("{}:{}", self.0, std::str::from_utf8(body)?))
    }

    fn encode(&self, value: &String) -> Result<Bytes, BoxError> {
        Ok(Bytes::copy_from_slice(value.as_bytes()))
    }
}

pub fn rule(label: &'static str, ranges: &[&str]) -> Rule<String> {
    let ranges = ranges
        .iter()
        .map(|range| range.parse::<StatusRange>().unwrap())
        .collect::<Vec<_>>();
    Rule::new(TypeName::new(label), ranges, move || -> Option<BoxCodec<String>> {
        Some(Box::new(Labeled(label)))
    })
    .unwrap()
}
