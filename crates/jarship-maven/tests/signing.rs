use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use jarship_core::properties::PropertySource;
use jarship_core::version::{SnapshotPredicate, SuffixPredicate};
use jarship_maven::signing::{should_sign, signature_path, GpgSigner, Signer, SignerGate};
use jarship_util::errors::JarshipError;

#[derive(Default)]
struct RecordingSigner {
    signed: RefCell<Vec<PathBuf>>,
}

impl Signer for RecordingSigner {
    fn sign(&self, file: &Path) -> Result<PathBuf, JarshipError> {
        self.signed.borrow_mut().push(file.to_path_buf());
        Ok(signature_path(file))
    }
}

#[test]
fn should_sign_truth_table() {
    let predicate = SuffixPredicate::default();
    for version in ["1.0.0", "1.0.0-SNAPSHOT", "-SNAPSHOT", "2.0.0-rc.1"] {
        for enabled in [true, false] {
            assert_eq!(
                should_sign(version, enabled, &predicate),
                enabled && !predicate.is_snapshot(version),
                "version={version} enabled={enabled}"
            );
        }
    }
}

#[test]
fn gate_signs_every_file_when_required() {
    let signer = RecordingSigner::default();
    let files = vec![PathBuf::from("out/lib-1.0.jar"), PathBuf::from("out/lib-1.0.pom")];
    let gate = SignerGate::new(true, Some(&signer));
    let signatures = gate.apply(&files).unwrap();

    assert_eq!(signatures.len(), 2);
    assert_eq!(signatures[0].signature, PathBuf::from("out/lib-1.0.jar.asc"));
    assert_eq!(*signer.signed.borrow(), files);
}

#[test]
fn gate_skips_when_not_required() {
    let signer = RecordingSigner::default();
    let gate = SignerGate::new(false, Some(&signer));
    let signatures = gate.apply(&[PathBuf::from("lib.jar")]).unwrap();
    assert!(signatures.is_empty());
    assert!(signer.signed.borrow().is_empty());
}

#[test]
fn gate_without_key_is_fatal_when_required() {
    let gate = SignerGate::new(true, None);
    let err = gate.apply(&[PathBuf::from("lib.jar")]).unwrap_err();
    assert!(matches!(err, JarshipError::SigningKeyMissing { .. }));
}

#[test]
fn gate_without_key_is_fine_when_not_required() {
    let gate = SignerGate::new(false, None);
    assert!(gate.apply(&[PathBuf::from("lib.jar")]).unwrap().is_empty());
}

#[test]
fn gpg_signer_from_properties() {
    let mut file = BTreeMap::new();
    file.insert("signing.gnupg.keyName".to_string(), "ABCD1234".to_string());
    file.insert("signing.gnupg.passphrase".to_string(), "pw".to_string());
    let source = PropertySource::from_layers(file, Vec::new(), Vec::new(), BTreeMap::new());

    let signer = GpgSigner::from_properties(&source).unwrap();
    assert_eq!(signer.key_name(), "ABCD1234");

    let cmd = signer.command(Path::new("lib.jar"), Path::new("lib.jar.asc"));
    assert_eq!(cmd.program(), "gpg");
    let args = cmd.get_args();
    assert!(args.contains(&"--detach-sign".to_string()));
    assert!(args.windows(2).any(|w| w[0] == "--local-user" && w[1] == "ABCD1234"));
    assert!(args.windows(2).any(|w| w[0] == "--passphrase" && w[1] == "pw"));
    assert_eq!(args.last().map(String::as_str), Some("lib.jar"));
    assert!(!cmd.to_string().contains("pw "));
    assert!(!format!("{signer:?}").contains("\"pw\""));
}

#[test]
fn gpg_signer_absent_without_key_name() {
    let source = PropertySource::from_layers(BTreeMap::new(), Vec::new(), Vec::new(), BTreeMap::new());
    assert!(GpgSigner::from_properties(&source).is_none());
}

#[test]
fn gpg_failure_is_signing_error() {
    let signer = GpgSigner::new("KEY").with_executable("nonexistent_gpg_xyz_123");
    let err = signer.sign(Path::new("lib.jar")).unwrap_err();
    assert!(matches!(err, JarshipError::Signing { .. }));
}
