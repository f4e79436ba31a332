use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The caller's parsed `Cargo.toml`, used to find how generated code should
/// name a workspace crate.
///
/// Derive output runs inside the user's crate, which may depend on
/// `fp_reflect` directly or only on the `fieldpath` facade. Reading the
/// manifest tells the two apart.
///
/// # Example
///
/// ```rust
/// # use fp_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("fp_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. `name` is listed in `dependencies`: `::name`.
/// 2. `name` starts with `fp_` and `fieldpath` is listed: `::fieldpath::<rest>`
///    (e.g. `fp_reflect` -> `::fieldpath::reflect`).
/// 3. Same two checks against `dev-dependencies`.
/// 4. Otherwise `::name`.
///
/// A crate naming itself should carry `extern crate self as <name>;` so rule 4
/// also works inside its own doc tests.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "fieldpath";
const MEMBER_PREFIX: &str = "fp_";

impl Manifest {
    #[inline(never)]
    fn manifest_path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .expect("CARGO_MANIFEST_DIR should be set by cargo for proc-macro expansion");
        let path = PathBuf::from(dir).join("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn modified_time(path: &Path) -> std::io::Result<SystemTime> {
        std::fs::metadata(path).and_then(|meta| meta.modified())
    }

    #[inline(never)]
    fn read(path: &Path) -> Document<Box<str>> {
        let text = std::fs::read_to_string(path)
            .unwrap_or_else(|err| panic!("Unable to read {}: {err}", path.display()))
            .into_boxed_str();
        Document::parse(text)
            .unwrap_or_else(|err| panic!("Failed to parse {}: {err}", path.display()))
    }

    fn path_of(segments: &[&str]) -> syn::Path {
        let text = segments
            .iter()
            .fold(String::new(), |acc, seg| acc + "::" + seg);
        syn::parse_str(&text).expect("crate names are valid path segments")
    }

    fn find_in(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::path_of(&[name]));
        }
        let module = name.strip_prefix(MEMBER_PREFIX)?;
        deps.contains_key(FACADE_NAME)
            .then(|| Self::path_of(&[FACADE_NAME, module]))
    }

    /// Returns the path generated code should use for the crate `name`.
    ///
    /// See the type-level documentation for the resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        for section in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = self.manifest.get(section)
                && let Some(path) = Self::find_in(deps, name)
            {
                return path;
            }
        }
        Self::path_of(&[name])
    }

    /// Runs `func` with the caller's manifest.
    ///
    /// Parsed manifests are cached per path and refreshed when the file's
    /// modification time changes. Call this once per macro invocation and
    /// pass the resulting path around.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let path = Self::manifest_path();
        let modified_time =
            Self::modified_time(&path).expect("Cargo.toml should have a modified time");

        {
            let cache = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = cache.get(&path)
                && manifest.modified_time == modified_time
            {
                return func(manifest);
            }
        }

        let manifest = Manifest {
            manifest: Self::read(&path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Document::parse(text.to_owned().into_boxed_str()).unwrap(),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }

    // `syn::Path` has no `Display`.
    fn to_string(path: &syn::Path) -> String {
        let segments: Vec<String> = path
            .segments
            .iter()
            .map(|seg| seg.ident.to_string())
            .collect();
        let prefix = if path.leading_colon.is_some() { "::" } else { "" };
        format!("{prefix}{}", segments.join("::"))
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\nfp_reflect = \"0.1\"\n");
        assert_eq!(to_string(&m.get_crate_path("fp_reflect")), "::fp_reflect");
    }

    #[test]
    fn facade_dependency() {
        let m = manifest("[dependencies]\nfieldpath = \"0.1\"\n");
        assert_eq!(to_string(&m.get_crate_path("fp_reflect")), "::fieldpath::reflect");
    }

    #[test]
    fn dev_dependency_and_fallback() {
        let m = manifest("[dev-dependencies]\nfieldpath = \"0.1\"\n");
        assert_eq!(to_string(&m.get_crate_path("fp_reflect")), "::fieldpath::reflect");

        let m = manifest("[dependencies]\nserde = \"1\"\n");
        assert_eq!(to_string(&m.get_crate_path("fp_reflect")), "::fp_reflect");
    }
}
