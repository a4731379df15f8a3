use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Repository identity key.
///
/// Deployments have keyed repositories either by numeric id or by unique
/// name. The concrete key type is bound once at composition time; everything
/// downstream of the stores is generic over it and never inspects the
/// representation.
pub trait RepoKey:
    Clone + Eq + Hash + Debug + Display + Serialize + Send + Sync + 'static
{
}

impl RepoKey for i64 {}
impl RepoKey for String {}

/// A tracked unit (a team or project) that accumulates word-chain events.
///
/// `status` is a small integer managed by an external system; it is passed
/// through to summaries without validation or interpretation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Repository<K> {
    pub id: K,
    pub name: String,
    pub status: i64,
}
