use crate::kernel::language::LanguageId;

#[test]
fn from_file_name_maps_supported_extensions() {
    let cases = [
        ("a.py", LanguageId::Python),
        ("A.PY", LanguageId::Python),
        ("Main.java", LanguageId::Java),
        ("a.cpp", LanguageId::Cpp),
        ("a.cc", LanguageId::Cpp),
        ("a.cxx", LanguageId::Cpp),
        ("a.CXX", LanguageId::Cpp),
    ];
    for (name, expected) in cases {
        assert_eq!(LanguageId::from_file_name(name), expected, "{name}");
    }
}

#[test]
fn from_file_name_defaults_to_python() {
    assert_eq!(LanguageId::from_file_name("notes.txt"), LanguageId::Python);
    assert_eq!(LanguageId::from_file_name("Makefile"), LanguageId::Python);
    assert_eq!(LanguageId::from_file_name(""), LanguageId::Python);
}

#[test]
fn from_name_is_exact() {
    assert_eq!(LanguageId::from_name("python"), Some(LanguageId::Python));
    assert_eq!(LanguageId::from_name("java"), Some(LanguageId::Java));
    assert_eq!(LanguageId::from_name("cpp"), Some(LanguageId::Cpp));
    assert_eq!(LanguageId::from_name("Python"), None);
    assert_eq!(LanguageId::from_name("rust"), None);
}

#[test]
fn untitled_name_uses_language_extension() {
    assert_eq!(LanguageId::Python.untitled_name(), "untitled.py");
    assert_eq!(LanguageId::Java.untitled_name(), "untitled.java");
    assert_eq!(LanguageId::Cpp.untitled_name(), "untitled.cpp");
}

#[test]
fn samples_contain_their_hello_marker() {
    for lang in LanguageId::ALL {
        let (name, source) = lang.sample();
        assert_eq!(LanguageId::from_file_name(name), lang);
        assert!(
            lang.hello_markers().iter().any(|m| source.contains(m)),
            "{lang} sample"
        );
    }
}

#[test]
fn templates_are_not_hello_programs() {
    for lang in LanguageId::ALL {
        let template = lang.default_template();
        assert!(!lang.hello_markers().iter().any(|m| template.contains(m)));
    }
}

#[test]
fn serde_uses_lowercase_ids() {
    let json = serde_json::to_string(&LanguageId::Cpp).unwrap();
    assert_eq!(json, "\"cpp\"");
    let back: LanguageId = serde_json::from_str("\"java\"").unwrap();
    assert_eq!(back, LanguageId::Java);
}
