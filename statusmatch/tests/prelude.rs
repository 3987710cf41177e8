use std::sync::Arc;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use statusmatch::codec::{BoxCodec, BoxError, Codec};
use statusmatch::prelude::*;
use statusmatch::{Breadth, ResponseError, TypeName, resolve};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Created {
    id: u64,
}

struct Empty;

impl Codec<()> for Empty {
    fn decode(&self, body: &[u8]) -> Result<(), BoxError> {
        if body.is_empty() {
            Ok(())
        } else {
            Err("expected an empty body".into())
        }
    }

    fn encode(&self, _value: &()) -> Result<Bytes, BoxError> {
        Ok(Bytes::new())
    }
}

type Reply = OneOf<Created, ()>;

fn reply_rules() -> Arc<RuleSet<Reply>> {
    let no_content = Reply::second_rule_with([StatusRange::code(204)], || -> Option<BoxCodec<()>> {
        Some(Box::new(Empty))
    })
    .unwrap();
    Arc::new(
        RuleSet::try_from_rules([
            Reply::first_rule([StatusRange::from(StatusClass::Success)], JsonFormat).unwrap(),
            no_content,
        ])
        .unwrap(),
    )
}

#[test]
fn test_exact_code_beats_class() {
    let rules = reply_rules();

    assert_eq!(resolve(&rules, 201).unwrap().target(), &TypeName::new("Created"));
    assert_eq!(resolve(&rules, 204).unwrap().target(), &TypeName::new("()"));
    assert_eq!(StatusRange::code(204).breadth(), Breadth::Code);
}

#[tokio::test]
async fn test_custom_codec_alternative() {
    let response = TypedResponse::from_bytes(http::StatusCode::NO_CONTENT, Bytes::new(), reply_rules());
    assert_eq!(response.value().await.unwrap(), &OneOf::Second(()));

    let response = TypedResponse::from_bytes(http::StatusCode::NO_CONTENT, "unexpected", reply_rules());
    assert!(matches!(
        response.value().await,
        Err(ResponseError::BodyDecoding { .. })
    ));
}
