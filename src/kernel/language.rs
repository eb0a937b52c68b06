use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    Python,
    Java,
    Cpp,
}

impl LanguageId {
    pub const ALL: [LanguageId; 3] = [Self::Python, Self::Java, Self::Cpp];

    /// Exact identifier match: `python`, `java`, `cpp`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "python" => Some(Self::Python),
            "java" => Some(Self::Java),
            "cpp" => Some(Self::Cpp),
            _ => None,
        }
    }

    /// Infers the language from the last extension segment. Unknown or
    /// missing extensions fall back to Python.
    pub fn from_file_name(name: &str) -> Self {
        let ext = name.rsplit('.').next().unwrap_or_default();
        match ext.to_ascii_lowercase().as_str() {
            "java" => Self::Java,
            "cpp" | "cc" | "cxx" => Self::Cpp,
            _ => Self::Python,
        }
    }

    pub fn language_id(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Java => "java",
            Self::Cpp => "cpp",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Python => "py",
            Self::Java => "java",
            Self::Cpp => "cpp",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::Java => "Java",
            Self::Cpp => "C++",
        }
    }

    pub fn untitled_name(self) -> String {
        format!("untitled.{}", self.extension())
    }

    pub fn default_template(self) -> &'static str {
        match self {
            Self::Python => {
                "# New Python file\n\ndef main():\n    pass\n\nif __name__ == \"__main__\":\n    main()"
            }
            Self::Java => {
                "public class NewClass {\n    public static void main(String[] args) {\n        // Your code here\n    }\n}"
            }
            Self::Cpp => "#include <iostream>\n\nint main() {\n    // Your code here\n    return 0;\n}",
        }
    }

    /// Name and source of the file a fresh workspace starts with.
    pub fn sample(self) -> (&'static str, &'static str) {
        match self {
            Self::Python => (
                "main.py",
                "# Welcome to the Online Code Editor\n\ndef hello_world():\n    print(\"Hello, World!\")\n\nif __name__ == \"__main__\":\n    hello_world()",
            ),
            Self::Java => (
                "HelloWorld.java",
                "public class HelloWorld {\n    public static void main(String[] args) {\n        System.out.println(\"Hello, World!\");\n    }\n}",
            ),
            Self::Cpp => (
                "main.cpp",
                "#include <iostream>\n\nint main() {\n    std::cout << \"Hello, World!\" << std::endl;\n    return 0;\n}",
            ),
        }
    }

    /// Literal substrings the simulator treats as a "hello world" program.
    pub fn hello_markers(self) -> &'static [&'static str] {
        match self {
            Self::Python => &["print(\"Hello, World!\")", "hello_world"],
            Self::Java => &["System.out.println(\"Hello, World!\")"],
            Self::Cpp => &["std::cout << \"Hello, World!\""],
        }
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.language_id())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
