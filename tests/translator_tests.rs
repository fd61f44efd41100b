// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation tests: every table entry, literal protection, longest match

use pyo3::Python;
use thai_python::lexicon::{KEYWORDS, OPERATORS};
use thai_python::translator::{shield, validate, TranslateError, Translator};

fn translate_ok(source: &str) -> String {
    let translation = Translator::new().translate(source);
    assert!(
        translation.error.is_none(),
        "{:?} should translate, got {:?}",
        source,
        translation.error
    );
    translation.code
}

fn parses(code: &str) -> bool {
    Python::with_gil(|py| validate::check(py, code).expect("ast available").is_ok())
}

/// (Thai token, snippet using it, expected Python)
const KEYWORD_SNIPPETS: &[(&str, &str, &str)] = &[
    ("ฟังก์ชัน", "ฟังก์ชัน f():\n    pass\n", "def f():\n    pass\n"),
    ("ส่งคืน", "def f():\n    ส่งคืน 1\n", "def f():\n    return 1\n"),
    ("ถ้า", "ถ้า x:\n    pass\n", "if x:\n    pass\n"),
    ("ทำอีก", "if x:\n    pass\nทำอีก:\n    pass\n", "if x:\n    pass\nelse:\n    pass\n"),
    ("หรือถ้า", "if x:\n    pass\nหรือถ้า y:\n    pass\n", "if x:\n    pass\nelif y:\n    pass\n"),
    ("สำหรับ", "สำหรับ i in y:\n    pass\n", "for i in y:\n    pass\n"),
    ("ใน", "x = 1 ใน y\n", "x = 1 in y\n"),
    ("ขณะที่", "ขณะที่ x:\n    pass\n", "while x:\n    pass\n"),
    ("พยายาม", "พยายาม:\n    pass\nexcept:\n    pass\n", "try:\n    pass\nexcept:\n    pass\n"),
    ("จับข้อผิดพลาด", "try:\n    pass\nจับข้อผิดพลาด:\n    pass\n", "try:\n    pass\nexcept:\n    pass\n"),
    ("ท้ายที่สุด", "try:\n    pass\nท้ายที่สุด:\n    pass\n", "try:\n    pass\nfinally:\n    pass\n"),
    ("จริง", "x = จริง\n", "x = True\n"),
    ("เท็จ", "x = เท็จ\n", "x = False\n"),
    ("ไม่มี", "x = ไม่มี\n", "x = None\n"),
    ("พิมพ์", "พิมพ์(1)\n", "print(1)\n"),
    ("ช่วง", "x = ช่วง(3)\n", "x = range(3)\n"),
    ("รายการ", "x = รายการ()\n", "x = list()\n"),
    ("พจนานุกรม", "x = พจนานุกรม()\n", "x = dict()\n"),
    ("เซต", "x = เซต()\n", "x = set()\n"),
    ("ตัวเลข", "x = ตัวเลข(y)\n", "x = int(y)\n"),
    ("ทศนิยม", "x = ทศนิยม(y)\n", "x = float(y)\n"),
    ("ข้อความ", "x = ข้อความ(y)\n", "x = str(y)\n"),
    ("ความยาว", "x = ความยาว(y)\n", "x = len(y)\n"),
];

const OPERATOR_SNIPPETS: &[(&str, &str, &str)] = &[
    ("บวก", "x = a บวก b\n", "x = a + b\n"),
    ("ลบ", "x = a ลบ b\n", "x = a - b\n"),
    ("คูณ", "x = a คูณ b\n", "x = a * b\n"),
    ("หาร", "x = a หาร b\n", "x = a / b\n"),
    ("และ", "x = a และ b\n", "x = a and b\n"),
    ("หรือ", "x = a หรือ b\n", "x = a or b\n"),
    ("ไม่", "x = ไม่ a\n", "x = not a\n"),
    ("เท่ากับ", "x = a เท่ากับ b\n", "x = a == b\n"),
    ("ไม่เท่ากับ", "x = a ไม่เท่ากับ b\n", "x = a != b\n"),
    ("มากกว่า", "x = a มากกว่า b\n", "x = a > b\n"),
    ("น้อยกว่า", "x = a น้อยกว่า b\n", "x = a < b\n"),
    ("มากกว่าเท่ากับ", "x = a มากกว่าเท่ากับ b\n", "x = a >= b\n"),
    ("น้อยกว่าเท่ากับ", "x = a น้อยกว่าเท่ากับ b\n", "x = a <= b\n"),
];

#[test]
fn every_keyword_translates_and_parses() {
    for (thai, _) in KEYWORDS {
        let (_, source, expected) = KEYWORD_SNIPPETS
            .iter()
            .find(|(token, _, _)| token == thai)
            .unwrap_or_else(|| panic!("no snippet for keyword {}", thai));
        let code = translate_ok(source);
        assert_eq!(&code, expected, "keyword {}", thai);
        assert!(parses(&code));
    }
}

#[test]
fn every_operator_translates_and_parses() {
    for (thai, _) in OPERATORS {
        let (_, source, expected) = OPERATOR_SNIPPETS
            .iter()
            .find(|(token, _, _)| token == thai)
            .unwrap_or_else(|| panic!("no snippet for operator {}", thai));
        let code = translate_ok(source);
        assert_eq!(&code, expected, "operator {}", thai);
        assert!(parses(&code));
    }
}

#[test]
fn test_basic_translation() {
    let source = "\nฟังก์ชัน ทักทาย():\n    พิมพ์(\"สวัสดี\")\n";
    let expected = "\ndef ทักทาย():\n    print(\"สวัสดี\")\n";
    assert_eq!(translate_ok(source), expected);
}

#[test]
fn test_control_flow_translation() {
    let source = "ถ้า จริง:\n    พิมพ์(\"จริง\")\nทำอีก:\n    พิมพ์(\"เท็จ\")\n";
    let expected = "if True:\n    print(\"จริง\")\nelse:\n    print(\"เท็จ\")\n";
    assert_eq!(translate_ok(source), expected);
}

#[test]
fn test_operators_translation() {
    assert_eq!(translate_ok("ก = 1 บวก 2 คูณ 3"), "ก = 1 + 2 * 3");
}

#[test]
fn test_string_preservation() {
    let source = "พิมพ์(\"ฟังก์ชัน inside string should not translate\")";
    assert_eq!(
        translate_ok(source),
        "print(\"ฟังก์ชัน inside string should not translate\")"
    );
}

#[test]
fn literals_are_byte_identical() {
    let literals = [
        r#""ถ้า จริง บวก ไม่มี""#,
        r#"'มากกว่าเท่ากับ หรือ และ'"#,
        r#""it's ใน 'quotes'""#,
        r#"'escaped \' ถ้า'"#,
        r#""escaped \" ลบ""#,
        r#""__STR0_0__ ส่งคืน""#,
        "\"\u{E000}0\u{E001} ไม่มี\"",
    ];
    for literal in literals {
        let source = format!("x = {}\n", literal);
        let code = translate_ok(&source);
        assert_eq!(code, source, "literal {} was altered", literal);
    }
}

#[test]
fn triple_quoted_literal_survives() {
    let source = "x = \"\"\"ถ้า\nจริง\"\"\"\n";
    assert_eq!(translate_ok(source), source);
}

#[test]
fn triple_quoted_literal_with_inner_quotes_survives() {
    let sources = [
        "x = '''it's หาร it's'''\n",
        "x = \"\"\"ก \" ถ้า \" ข\"\"\"\n",
        "x = \"\"\"ก \"บวก\" ข\"\"\"\n",
        "def f():\n    \"\"\"คืนค่า \"จริง\" หรือ 'เท็จ'\"\"\"\n    return 1\n",
    ];
    for source in sources {
        assert_eq!(translate_ok(source), source);
    }
}

#[test]
fn greater_or_equal_is_one_operator() {
    let code = translate_ok("x = 2 มากกว่าเท่ากับ 1\n");
    assert_eq!(code, "x = 2 >= 1\n");
    assert!(!code.contains("เท่ากับ"));
    assert!(!code.contains("> =") && !code.contains(">=="));
}

#[test]
fn keyword_inside_identifier_is_kept() {
    assert_eq!(translate_ok("ถ้าหาก = 1\n"), "ถ้าหาก = 1\n");
    assert_eq!(translate_ok("จริงจัง = 1\n"), "จริงจัง = 1\n");
}

#[test]
fn shield_restore_roundtrip() {
    let source = "ก = \"หนึ่ง\"\nข = 'สอง'\nพิมพ์(ก, ข, \"\"\"สาม\"\"\")\n";
    let (shielded, literals) = shield::shield(source);
    assert!(!shielded.contains("หนึ่ง"));
    assert_eq!(literals.restore(&shielded), source);
}

#[test]
fn test_syntax_error() {
    let translation = Translator::new().translate("ฟังก์ชัน ):");
    let err = translation.error.clone().expect("should fail");
    assert!(matches!(err, TranslateError::Syntax(_)));
    assert!(err.to_string().starts_with("Translation error: "));
    assert!(err.to_string().to_lowercase().contains("error"));
    // Best-effort text is still returned.
    assert_eq!(translation.code, "def ):");
    assert!(translation.into_result().is_err());
}

#[test]
fn unterminated_literal_is_substitutable_text() {
    let translation = Translator::new().translate("พิมพ์(\"ถ้า)\n");
    assert_eq!(translation.code, "print(\"if)\n");
    assert!(translation.error.is_some());
}

#[test]
fn keyword_flush_against_literal_is_translated() {
    let source = "ฟังก์ชัน f():\n    ส่งคืน\"ok\"\nพิมพ์(f())\n";
    assert_eq!(
        translate_ok(source),
        "def f():\n    return\"ok\"\nprint(f())\n"
    );
    assert_eq!(translate_ok("x = 'a'ใน'abc'\n"), "x = 'a'in'abc'\n");
}

#[test]
fn translation_serializes_error_as_text() {
    let translation = Translator::new().translate("ฟังก์ชัน ):");
    let json = serde_json::to_value(&translation).expect("json");
    assert_eq!(json["code"], "def ):");
    assert!(json["error"]
        .as_str()
        .expect("error string")
        .starts_with("Translation error: "));

    let ok = serde_json::to_value(Translator::new().translate("x = จริง")).expect("json");
    assert!(ok["error"].is_null());
}
