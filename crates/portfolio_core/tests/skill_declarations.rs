use portfolio_core::{duplicate_skill_names, parse_skill_declarations, SkillDeclaration};

const SKILL_LIST: &str = r#"
// Format: SkillName : [ Category, BaseLevel ]
Unreal Engine : [ FRONTEND, 50 ]
C/C++ : [ frontend, 50 ]

Python : [ FRONTEND, 20 ]
ChatGPT : [ OTHERS, 30 ]
this line is not a declaration
Drone pilot : [ OTHERS, 60 ]
Overflow : [ OTHERS, 250 ]
"#;

#[test]
fn parses_declarations_in_input_order() {
    let declarations = parse_skill_declarations(SKILL_LIST);
    let names: Vec<&str> = declarations.iter().map(|d| d.name.as_str()).collect();

    assert_eq!(
        names,
        vec!["Unreal Engine", "C/C++", "Python", "ChatGPT", "Drone pilot"]
    );
}

#[test]
fn categories_are_upper_cased() {
    let declarations = parse_skill_declarations(SKILL_LIST);
    assert_eq!(
        declarations[1],
        SkillDeclaration {
            name: "C/C++".to_string(),
            category: "FRONTEND".to_string(),
            base_level: 50,
        }
    );
}

#[test]
fn empty_and_comment_only_input_yields_nothing() {
    assert!(parse_skill_declarations("").is_empty());
    assert!(parse_skill_declarations("\n  // Rust : [ BACKEND, 10 ]\n\n").is_empty());
}

#[test]
fn repeated_names_are_kept_and_reported() {
    let raw = "Rust : [ BACKEND, 10 ]\nGo : [ BACKEND, 5 ]\nRust : [ EMBEDDED, 30 ]";
    let declarations = parse_skill_declarations(raw);

    assert_eq!(declarations.len(), 3);
    assert_eq!(declarations[2].category, "EMBEDDED");
    assert_eq!(duplicate_skill_names(&declarations), vec!["Rust".to_string()]);
}

#[test]
fn parsing_is_idempotent() {
    assert_eq!(
        parse_skill_declarations(SKILL_LIST),
        parse_skill_declarations(SKILL_LIST)
    );
}

#[test]
fn trailing_text_after_level_group_is_ignored() {
    let declarations = parse_skill_declarations("Python : [ FRONTEND, 20 ] // main language\n");

    assert_eq!(
        declarations,
        vec![SkillDeclaration {
            name: "Python".to_string(),
            category: "FRONTEND".to_string(),
            base_level: 20,
        }]
    );
}
