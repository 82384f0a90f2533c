//! Writing wallets to disk.

use std::path::Path;

use crate::wallet::HdWallet;
use crate::Result;

/// Write `wallet` as JSON to `path`, creating or truncating the file.
///
/// No locking is performed; concurrent writers to the same path race and
/// the last one wins.
pub fn save_to_file<W: HdWallet + ?Sized>(
    wallet: &W,
    path: impl AsRef<Path>,
    indent: usize,
) -> Result<()> {
    let path = path.as_ref();
    let json = wallet.to_json(indent)?;
    std::fs::write(path, json)?;
    tracing::debug!(path = %path.display(), "wallet saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::tests::TestKind;
    use crate::wallet::{DataKind, DataValue};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct NameOnly;

    impl DataKind for NameOnly {
        const ALL: &'static [Self] = &[Self];

        fn name(self) -> &'static str {
            "wallet_name"
        }
    }

    struct Named(&'static str);

    impl HdWallet for Named {
        type KeyKind = TestKind;
        type DataKind = NameOnly;
        type Params = ();

        fn generate(&mut self, _: &()) -> Result<()> {
            Ok(())
        }

        fn is_watch_only(&self) -> bool {
            true
        }

        fn get_data(&self, _: NameOnly) -> Option<DataValue<'_, TestKind>> {
            Some(DataValue::Text(self.0))
        }
    }

    #[test]
    fn writes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");

        save_to_file(&Named("first"), &path, 0).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            r#"{"wallet_name":"first"}"#
        );

        save_to_file(&Named("second"), &path, 0).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            r#"{"wallet_name":"second"}"#
        );
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("wallet.json");
        let err = save_to_file(&Named("x"), &path, 0).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
