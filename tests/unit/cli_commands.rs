use super::*;

#[test]
fn blank_lines_are_skipped() {
    assert_eq!(parse_line("").unwrap(), None);
    assert_eq!(parse_line("   \t").unwrap(), None);
}

#[test]
fn new_takes_language_and_optional_name() {
    assert_eq!(
        parse_line("new python").unwrap(),
        Some(Line::New {
            language: LanguageId::Python,
            name: None
        })
    );
    assert_eq!(
        parse_line("new CPP solver.cpp").unwrap(),
        Some(Line::New {
            language: LanguageId::Cpp,
            name: Some("solver.cpp".to_string())
        })
    );
    assert!(parse_line("new ruby").unwrap_err().contains("unknown language"));
    assert!(parse_line("new").unwrap_err().contains("missing language"));
}

#[test]
fn new_with_only_a_file_name_infers_language() {
    assert_eq!(
        parse_line("new Solver.java").unwrap(),
        Some(Line::New {
            language: LanguageId::Java,
            name: Some("Solver.java".to_string())
        })
    );
    assert_eq!(
        parse_line("new graph.cc").unwrap(),
        Some(Line::New {
            language: LanguageId::Cpp,
            name: Some("graph.cc".to_string())
        })
    );
    assert_eq!(
        parse_line("new notes.txt").unwrap(),
        Some(Line::New {
            language: LanguageId::Python,
            name: Some("notes.txt".to_string())
        })
    );
}

#[test]
fn file_refs_accept_index_or_name() {
    assert_eq!(
        parse_line("open 2").unwrap(),
        Some(Line::Open(FileRef::Index(2)))
    );
    assert_eq!(
        parse_line("rm main.py").unwrap(),
        Some(Line::Remove(FileRef::Name("main.py".to_string())))
    );
    assert_eq!(
        parse_line("dup 0").unwrap(),
        Some(Line::Duplicate(FileRef::Name("0".to_string())))
    );
}

#[test]
fn edit_keeps_the_rest_of_the_line_and_unescapes() {
    assert_eq!(
        parse_line(r#"edit 1 print("hi")\nprint(2)"#).unwrap(),
        Some(Line::Edit(
            FileRef::Index(1),
            "print(\"hi\")\nprint(2)".to_string()
        ))
    );
    assert_eq!(
        parse_line("edit 1").unwrap(),
        Some(Line::Edit(FileRef::Index(1), String::new()))
    );
}

#[test]
fn rename_requires_a_name() {
    assert!(parse_line("rename 1").unwrap_err().contains("missing name"));
    assert_eq!(
        parse_line("rename 1 new name.py").unwrap(),
        Some(Line::Rename(FileRef::Index(1), "new name.py".to_string()))
    );
}

#[test]
fn unknown_verbs_are_errors() {
    let err = parse_line("compile").unwrap_err();
    assert!(err.contains("compile"));
}

#[test]
fn unescape_leaves_unknown_sequences_alone() {
    assert_eq!(unescape(r"a\tb"), "a\tb");
    assert_eq!(unescape(r"a\\n"), r"a\n");
    assert_eq!(unescape(r"a\q"), r"a\q");
    assert_eq!(unescape("trailing\\"), "trailing\\");
}
