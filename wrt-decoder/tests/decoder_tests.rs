//! End-to-end module decode scenarios.
//!
//! These build real Wasm binaries with `wat::parse_str` rather than
//! hand-assembled byte arrays, so the fixtures exercise the same
//! encoding a real toolchain emits.

use wrt_decoder::prelude::*;
use wrt_foundation::Arena;

#[test]
fn decodes_add_function_export() {
    let wasm = wat::parse_str(
        r#"
        (module
          (func (export "add") (param i32 i32) (result i32)
            local.get 0
            local.get 1
            i32.add
          )
        )
        "#,
    )
    .unwrap();

    let arena = Arena::new(1 << 16);
    let mut parser = Parser::new(&arena, &wasm);
    parser.parse().unwrap();

    let types = parser.type_section().unwrap();
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].params.len(), 2);
    assert_eq!(types[0].results.len(), 1);

    assert_eq!(parser.function_section().unwrap().len(), 1);

    let exports = parser.export_section().unwrap();
    assert_eq!(exports.len(), 1);
    assert_eq!(exports[0].name, b"add\0");
    assert_eq!(exports[0].desc, ExportDesc::Function(0));

    let code = parser.code_section().unwrap();
    assert_eq!(code.len(), 1);
    // local.get 0 ; local.get 1 ; i32.add (the terminating `end` is not stored)
    assert_eq!(code[0].expr.len(), 3);
}

#[test]
fn decodes_module_with_locals_and_control_flow() {
    let wasm = wat::parse_str(
        r#"
        (module
          (func (export "sum_to") (param i32) (result i32)
            (local i32 i32)
            i32.const 0
            local.set 1
            block
              loop
                local.get 2
                local.get 0
                i32.ge_s
                br_if 1
                local.get 1
                local.get 2
                i32.add
                local.set 1
                local.get 2
                i32.const 1
                i32.add
                local.set 2
                br 0
              end
            end
            local.get 1
          )
        )
        "#,
    )
    .unwrap();

    let arena = Arena::new(1 << 16);
    let mut parser = Parser::new(&arena, &wasm);
    parser.parse().unwrap();

    let code = parser.code_section().unwrap();
    assert_eq!(code.len(), 1);
    assert_eq!(code[0].locals.len(), 1);
    assert_eq!(code[0].locals[0].count, 2);

    // Balanced: every block/loop has exactly one matching `end` retained
    // (the function body's own terminating `end` is dropped).
    let opens = code[0]
        .expr
        .iter()
        .filter(|i| i.opcode.opens_block())
        .count();
    let ends = code[0]
        .expr
        .iter()
        .filter(|i| i.opcode == wrt_format::Opcode::End)
        .count();
    assert_eq!(opens, ends);
}

#[test]
fn rejects_truncated_module() {
    let arena = Arena::new(1024);
    let mut parser = Parser::new(&arena, &[0x00, 0x61, 0x73]);
    assert!(parser.parse().is_err());
}

#[test]
fn rejects_module_with_bad_version() {
    let arena = Arena::new(1024);
    let bytes = [0x00, 0x61, 0x73, 0x6D, 0x02, 0x00, 0x00, 0x00];
    let mut parser = Parser::new(&arena, &bytes);
    assert!(parser.parse().is_err());
}

#[test]
fn multiple_functions_stay_in_positional_correspondence() {
    let wasm = wat::parse_str(
        r#"
        (module
          (func (export "one") (result i32) i32.const 1)
          (func (export "two") (result i32) i32.const 2)
        )
        "#,
    )
    .unwrap();

    let arena = Arena::new(1 << 16);
    let mut parser = Parser::new(&arena, &wasm);
    parser.parse().unwrap();

    let exports = parser.export_section().unwrap();
    let code = parser.code_section().unwrap();
    assert_eq!(code.len(), 2);

    for export in exports {
        let ExportDesc::Function(idx) = export.desc else { panic!("expected function export") };
        let body = &code[idx as usize];
        assert_eq!(body.expr.len(), 1);
    }
}
