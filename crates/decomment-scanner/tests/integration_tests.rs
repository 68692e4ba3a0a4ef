//! End-to-end tests over realistic source files.

use decomment_scanner::{CommentKind, Language, comment_ranges, strip, strip_language};

const SAMPLE_JS: &str = r#"// This is a single line comment
function hello() {
    /* This is a multi-line comment
       that spans multiple lines */
    console.log('Hello World!'); // Inline comment
    return true;
}

/**
 * JSDoc comment block
 * @param {string} name - The name parameter
 * @returns {string} Greeting message
 */
function greet(name) {
    // Another single line comment
    return `Hello, ${name}!`;
}

// Final comment
const test = 'value'; /* End comment */"#;

const SAMPLE_JS_STRIPPED: &str = concat!(
    "\nfunction hello() {\n",
    "    \n",
    "    console.log('Hello World!'); \n",
    "    return true;\n",
    "}\n",
    "\n",
    "\n",
    "function greet(name) {\n",
    "    \n",
    "    return `Hello, ${name}!`;\n",
    "}\n",
    "\n",
    "\n",
    "const test = 'value'; ",
);

#[test]
fn test_sample_javascript_file() {
    assert_eq!(strip_language(SAMPLE_JS, Language::CLike), SAMPLE_JS_STRIPPED);
}

#[test]
fn test_sample_comment_inventory() {
    let kinds: Vec<CommentKind> = comment_ranges(SAMPLE_JS, Language::CLike.profile())
        .iter()
        .map(|range| range.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            CommentKind::Line,
            CommentKind::Block,
            CommentKind::Line,
            CommentKind::Block,
            CommentKind::Line,
            CommentKind::Line,
            CommentKind::Block,
        ]
    );
}

#[test]
fn test_production_module() {
    let source = r#"/**
 * Production module
 * @module production
 */

// Configuration
const API_URL = "https://api.example.com/v1"; // endpoint
const PATTERN = /^\/api\/v\d+\//; /* versioned paths */

export function fetchAll(ids) {
    const per = ids.length / 2; // half per batch
    return ids.map((id) => `${API_URL}/items/${id /* numeric */}`);
}
"#;
    let expected = concat!(
        "\n",
        "\n",
        "\n",
        "const API_URL = \"https://api.example.com/v1\"; \n",
        "const PATTERN = /^\\/api\\/v\\d+\\//; \n",
        "\n",
        "export function fetchAll(ids) {\n",
        "    const per = ids.length / 2; \n",
        "    return ids.map((id) => `${API_URL}/items/${id }`);\n",
        "}\n",
    );
    assert_eq!(strip(source, Language::CLike.profile()), expected);
}

#[test]
fn test_react_component() {
    let source = r#"// Button component
import React from 'react';

/**
 * A reusable button.
 */
const Button = ({ label, onClick }) => {
    // Handle click event
    const handleClick = (event) => {
        event.preventDefault(); // Stop navigation

        /* Call the handler if provided */
        if (onClick) {
            onClick(event);
        }
    };

    return (
        <button
            className="custom-button"
            onClick={handleClick}
            type="button"
        >
            {/* Button label */}
            {label}
        </button>
    );
};

// Default props
Button.defaultProps = {
    label: 'Click Me',  // Default label
    onClick: null       // No handler
};

export default Button;
"#;
    let expected = concat!(
        "\n",
        "import React from 'react';\n",
        "\n",
        "\n",
        "const Button = ({ label, onClick }) => {\n",
        "    \n",
        "    const handleClick = (event) => {\n",
        "        event.preventDefault(); \n",
        "\n",
        "        \n",
        "        if (onClick) {\n",
        "            onClick(event);\n",
        "        }\n",
        "    };\n",
        "\n",
        "    return (\n",
        "        <button\n",
        "            className=\"custom-button\"\n",
        "            onClick={handleClick}\n",
        "            type=\"button\"\n",
        "        >\n",
        "            {}\n",
        "            {label}\n",
        "        </button>\n",
        "    );\n",
        "};\n",
        "\n",
        "\n",
        "Button.defaultProps = {\n",
        "    label: 'Click Me',  \n",
        "    onClick: null       \n",
        "};\n",
        "\n",
        "export default Button;\n",
    );
    assert_eq!(strip_language(source, Language::from_extension("jsx")), expected);
}

#[test]
fn test_web_project_files() {
    assert_eq!(
        strip_language("/* Styles */\nbody { margin: 0; }", Language::Css),
        "\nbody { margin: 0; }"
    );
    assert_eq!(
        strip_language("<!-- HTML -->\n<div>Content</div>", Language::Markup),
        "\n<div>Content</div>"
    );
    assert_eq!(
        strip_language("// App\nconsole.log(\"app\");", Language::CLike),
        "\nconsole.log(\"app\");"
    );
}

#[test]
fn test_large_input() {
    let mut source = String::new();
    let mut expected = String::new();
    for i in 0..5_000 {
        source.push_str(&format!("const v{i} = {i} / 2; // note {i}\n/* block {i} */\n"));
        expected.push_str(&format!("const v{i} = {i} / 2; \n\n"));
    }
    assert_eq!(strip_language(&source, Language::CLike), expected);
}
