use crate::{Error, ErrorKind};
use std::collections::HashSet;
use std::fs;
use std::hash::Hash;
use std::str::FromStr;

/**
Load a set of node ids from a text file, one id per line.

Leading and trailing whitespace on each line is trimmed and blank lines are
skipped. Intended as a companion for building the `group: HashSet<T>`
argument to [group_closeness_centrality](super::closeness::group_closeness_centrality)
from an external file.
*/
pub fn load_node_list<T>(path: &str) -> Result<HashSet<T>, Error>
where
    T: FromStr + Eq + Hash,
{
    let contents = fs::read_to_string(path).map_err(|e| Error {
        kind: ErrorKind::InvalidArgument,
        message: format!("could not read node list file '{}': {}", path, e),
    })?;

    contents
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.parse::<T>().map_err(|_| Error {
                kind: ErrorKind::InvalidArgument,
                message: format!("could not parse node id from line: '{}'", line),
            })
        })
        .collect()
}
