// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Key normalization for case-insensitive environments.
//!
//! ```text
//! fold("Path") == fold("PATH") == "path"
//!
//! Several backing keys folding to one name:
//!   the greatest original key (byte order) answers for all of them,
//!   however the request is spelled
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;

/// Folds a name to its case-insensitive form.
pub(super) fn fold(name: &str) -> Cow<'_, str> {
    if name.chars().any(char::is_uppercase) {
        Cow::Owned(name.to_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

/// Finds the `(original name, value)` pair answering to `requested` under folding.
///
/// Agrees with [`folded_view`] for every spelling of `requested`.
pub(super) fn resolve(
    vars: impl Iterator<Item = (String, String)>,
    requested: &str,
) -> Option<(String, String)> {
    let folded = fold(requested);
    vars.filter(|(name, _)| fold(name) == folded)
        .max_by(|a, b| a.0.cmp(&b.0))
}

/// Builds the folded view: folded name to the `(original name, value)` pair it resolves to.
pub(super) fn folded_view(
    vars: impl Iterator<Item = (String, String)>,
) -> BTreeMap<String, (String, String)> {
    let mut view: BTreeMap<String, (String, String)> = BTreeMap::new();
    for (name, value) in vars {
        let folded = fold(&name).into_owned();
        match view.get_mut(&folded) {
            Some(best) if name > best.0 => *best = (name, value),
            Some(_) => {}
            None => {
                view.insert(folded, (name, value));
            }
        }
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> std::vec::IntoIter<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_fold_borrows_when_already_lowercase() {
        assert!(matches!(fold("path"), Cow::Borrowed("path")));
        assert_eq!(fold("MÖTLEY"), "mötley");
    }

    #[test]
    fn test_resolve_ignores_request_spelling() {
        let pairs = [("PATH", "upper"), ("path", "lower"), ("Path", "title")];

        for requested in ["PATH", "path", "Path", "pATH"] {
            let found = resolve(vars(&pairs), requested);
            assert_eq!(found, Some(("path".to_string(), "lower".to_string())), "{requested}");
        }
    }

    #[test]
    fn test_resolve_is_order_independent() {
        let a = resolve(vars(&[("PATH", "upper"), ("Path", "title")]), "path");
        let b = resolve(vars(&[("Path", "title"), ("PATH", "upper")]), "path");
        assert_eq!(a, b);
        assert_eq!(a, Some(("Path".to_string(), "title".to_string())));
    }

    #[test]
    fn test_folded_view_matches_resolve() {
        let view = folded_view(vars(&[("PATH", "upper"), ("path", "lower"), ("Home", "h")]));

        assert_eq!(view.len(), 2);
        assert_eq!(view["path"], ("path".to_string(), "lower".to_string()));
        assert_eq!(view["home"], ("Home".to_string(), "h".to_string()));
        for (folded, pair) in &view {
            let pairs = [("PATH", "upper"), ("path", "lower"), ("Home", "h")];
            assert_eq!(resolve(vars(&pairs), &folded.to_uppercase()).as_ref(), Some(pair));
        }
    }
}
