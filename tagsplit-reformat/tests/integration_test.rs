use std::path::{Path, PathBuf};

type Error = Box<dyn std::error::Error>;

/// Reformats each source fixture and compares with the expected output.
#[rstest::rstest]
#[tracing_test::traced_test]
fn test_with_fixtures(#[files("tests/fixtures/source/*.txt")] path: PathBuf) -> Result<(), Error> {
    let file_name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or("Invalid fixture file name")?;
    let expected_path = Path::new("tests")
        .join("fixtures")
        .join("expected")
        .join(file_name)
        .with_extension("txt");

    let input = std::fs::read_to_string(&path)?;
    let mut output = Vec::new();
    tagsplit_reformat::write_to(&input, &mut output)?;

    let expected = std::fs::read_to_string(&expected_path)?;
    let actual = String::from_utf8(output)?;

    // The reformatter emits no trailing newline; the expected fixtures end
    // with one.
    pretty_assertions::assert_eq!(
        expected.trim_end_matches('\n'),
        actual.as_str(),
        "output mismatch for fixture: {file_name}",
    );
    Ok(())
}

#[test]
fn test_process_file_writes_parsed_sibling() -> Result<(), Error> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("tokens.xml");
    std::fs::write(&input_path, "<keyword> class </keyword>\n")?;

    let output_path = tagsplit_reformat::process_file(&input_path)?;

    assert_eq!(output_path, dir.path().join("tokens_parsed.xml"));
    let output = std::fs::read_to_string(&output_path)?;
    pretty_assertions::assert_eq!("<keyword>\nclass\n</keyword>", output.as_str());
    Ok(())
}

#[test]
fn test_process_file_without_extension() -> Result<(), Error> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("NOTES");
    std::fs::write(&input_path, "plain text\n")?;

    let output_path = tagsplit_reformat::process_file(&input_path)?;

    assert_eq!(output_path, dir.path().join("NOTES_parsed"));
    let output = std::fs::read_to_string(&output_path)?;
    pretty_assertions::assert_eq!("plain text", output.as_str());
    Ok(())
}

#[test]
fn test_process_file_missing_input_leaves_no_output() -> Result<(), Error> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("missing.xml");

    let result = tagsplit_reformat::process_file(&input_path);

    assert!(matches!(result, Err(tagsplit_reformat::Error::Io(_))));
    assert!(!dir.path().join("missing_parsed.xml").exists());
    Ok(())
}

#[test]
fn test_derive_output_path_keeps_extension() -> Result<(), Error> {
    let path = tagsplit_reformat::derive_output_path(Path::new("dir/tokens.xml"))?;
    assert_eq!(path, Path::new("dir/tokens_parsed.xml"));
    Ok(())
}

#[test]
fn test_derive_output_path_rejects_bare_root() {
    assert!(matches!(
        tagsplit_reformat::derive_output_path(Path::new("/")),
        Err(tagsplit_reformat::Error::InvalidInputPath(_))
    ));
}
