// WRT - wrt-decoder
// Module: Wasm binary module parser
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Reads the Wasm 1.0 preamble and walks a module's sections in their
//! required order, decoding the type, function, export and code
//! sections into records owned by an [`Arena`].
//!
//! Sections the loader does not interpret (Custom, Import, Table,
//! Memory, Global, Start, Element, Data, DataCount) are skipped by
//! their declared byte size rather than decoded.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use wrt_error::{kinds, Result};
use wrt_foundation::{Arena, MemoryProvider};
use wrt_format::binary::{FUNCTYPE_MARKER, MAGIC, VERSION};
use wrt_format::{ExportKind, SectionId, ValueType};

use crate::module::{
    Code, Export, ExportDesc, ExportSection, FunctionSection, FunctionType, LocalsRun,
    TypeSection,
};
use crate::reader::ByteReader;

/// Drives a [`ByteReader`] over a Wasm binary module, allocating every
/// decoded record through `arena`.
///
/// The four section slots start empty and are populated in whatever
/// order the module presents them, subject to one ordering constraint:
/// a section that refers to another (function -> type, export/code ->
/// function) must come after it.
pub struct Parser<'arena, 'input, P: MemoryProvider> {
    arena: &'arena Arena<P>,
    reader: ByteReader<'input>,
    type_section: Option<TypeSection<'arena>>,
    function_section: Option<FunctionSection<'arena>>,
    export_section: Option<ExportSection<'arena>>,
    code_section: Option<crate::module::CodeSection<'arena>>,
}

impl<'arena, 'input, P: MemoryProvider> Parser<'arena, 'input, P> {
    /// Creates a parser over `buffer`, allocating into `arena`.
    #[must_use]
    pub fn new(arena: &'arena Arena<P>, buffer: &'input [u8]) -> Self {
        Self {
            arena,
            reader: ByteReader::from(buffer),
            type_section: None,
            function_section: None,
            export_section: None,
            code_section: None,
        }
    }

    /// The decoded type section, if one has been parsed.
    #[must_use]
    pub fn type_section(&self) -> Option<TypeSection<'arena>> {
        self.type_section
    }

    /// The decoded function section, if one has been parsed.
    #[must_use]
    pub fn function_section(&self) -> Option<FunctionSection<'arena>> {
        self.function_section
    }

    /// The decoded export section, if one has been parsed.
    #[must_use]
    pub fn export_section(&self) -> Option<ExportSection<'arena>> {
        self.export_section
    }

    /// The decoded code section, if one has been parsed.
    #[must_use]
    pub fn code_section(&self) -> Option<crate::module::CodeSection<'arena>> {
        self.code_section
    }

    /// Checks the preamble (magic + version) and then parses every
    /// section the reader presents, in whatever order they appear.
    ///
    /// # Errors
    ///
    /// Returns an error on the first contract violation encountered;
    /// any section slots populated before that point are left as-is
    /// but must not be consumed by the caller.
    pub fn parse(&mut self) -> Result<()> {
        match self.try_parse() {
            Ok(()) => Ok(()),
            Err(err) => {
                Self::log_failure(&err);
                Err(err)
            }
        }
    }

    fn try_parse(&mut self) -> Result<()> {
        self.check_header()?;
        self.check_version()?;
        while self.reader.can_read() {
            self.parse_next_section()?;
        }
        Ok(())
    }

    #[cfg(feature = "logging")]
    fn log_failure(err: &wrt_error::Error) {
        wrt_logging::error(&alloc::format!("module parse failed: {err}"));
    }

    #[cfg(not(feature = "logging"))]
    fn log_failure(_err: &wrt_error::Error) {}

    fn check_header(&mut self) -> Result<()> {
        let mut magic = [0u8; 4];
        self.reader.copy_bytes(4, &mut magic)?;
        if magic != MAGIC {
            return Err(kinds::invalid_magic());
        }
        Ok(())
    }

    fn check_version(&mut self) -> Result<()> {
        let mut version = [0u8; 4];
        self.reader.copy_bytes(4, &mut version)?;
        if version != VERSION {
            return Err(kinds::invalid_version());
        }
        Ok(())
    }

    /// Reads one section header (id byte, LEB128 size) and dispatches
    /// to the matching decoder, or skips `size` bytes for a section id
    /// this loader does not interpret.
    fn parse_next_section(&mut self) -> Result<()> {
        let id_byte = self.reader.get_u8()?;
        let section_id =
            SectionId::from_byte(id_byte).ok_or_else(|| kinds::unknown_section_id(id_byte))?;
        let size = self.reader.get_u32()? as usize;
        if size == 0 {
            return Ok(());
        }

        let start = self.reader.position();
        match section_id {
            SectionId::Type => self.parse_type_section()?,
            SectionId::Function => self.parse_function_section()?,
            SectionId::Export => self.parse_export_section()?,
            SectionId::Code => self.parse_code_section()?,
            _ => {
                self.reader.skip(size)?;
                return Ok(());
            }
        }
        if self.reader.position() - start != size {
            return Err(kinds::section_size_mismatch());
        }
        Ok(())
    }

    fn parse_type_section(&mut self) -> Result<()> {
        let count = self.reader.get_u32()? as usize;
        let mut types: Vec<FunctionType<'arena>> = Vec::with_capacity(count);
        for _ in 0..count {
            if self.reader.get_u8()? != FUNCTYPE_MARKER {
                return Err(kinds::invalid_functype_marker());
            }
            let params = self.read_value_type_vec()?;
            let results = self.read_value_type_vec()?;
            types.push(FunctionType { params, results });
        }
        self.type_section = Some(self.arena.write_array(&types));
        Ok(())
    }

    fn read_value_type_vec(&mut self) -> Result<&'arena [ValueType]> {
        let count = self.reader.get_u32()? as usize;
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(ValueType::from_byte(self.reader.get_u8()?)?);
        }
        Ok(self.arena.write_array(&values))
    }

    fn parse_function_section(&mut self) -> Result<()> {
        let type_section = self
            .type_section
            .ok_or_else(|| kinds::section_order_violation("function section before type section"))?;
        let count = self.reader.get_u32()? as usize;
        let mut indices = Vec::with_capacity(count);
        for _ in 0..count {
            let idx = self.reader.get_u32()?;
            if idx as usize >= type_section.len() {
                return Err(kinds::type_index_out_of_range());
            }
            indices.push(idx);
        }
        self.function_section = Some(self.arena.write_array(&indices));
        Ok(())
    }

    fn parse_export_section(&mut self) -> Result<()> {
        let function_section = self
            .function_section
            .ok_or_else(|| kinds::section_order_violation("export section before function section"))?;
        let count = self.reader.get_u32()? as usize;
        let mut exports = Vec::with_capacity(count);
        for _ in 0..count {
            let name_len = self.reader.get_u32()? as usize;
            let name = self.reader.copy_into_arena_cstring(self.arena, name_len)?;
            let kind = ExportKind::from_byte(self.reader.get_u8()?)?;
            let id = u64::from(self.reader.get_u32()?);
            let desc = match kind {
                ExportKind::Func => {
                    if id as usize >= function_section.len() {
                        return Err(kinds::function_index_out_of_range());
                    }
                    ExportDesc::Function(id)
                }
                ExportKind::Table => ExportDesc::Table(id),
                ExportKind::Mem => ExportDesc::Memory(id),
                ExportKind::Global => ExportDesc::Global(id),
            };
            exports.push(Export { name, desc });
        }
        self.export_section = Some(self.arena.write_array(&exports));
        Ok(())
    }

    fn parse_code_section(&mut self) -> Result<()> {
        let function_section = self
            .function_section
            .ok_or_else(|| kinds::section_order_violation("code section before function section"))?;
        let count = self.reader.get_u32()? as usize;
        let mut codes = Vec::with_capacity(count);
        for _ in 0..count {
            let body_size = self.reader.get_u32()?;
            let body_start = self.reader.position();
            let locals = self.parse_locals()?;
            let expr = crate::instructions::decode_expression(&mut self.reader, self.arena)?;
            if self.reader.position() - body_start != body_size as usize {
                return Err(kinds::section_size_mismatch());
            }
            codes.push(Code { size: body_size, locals, expr });
        }
        let _ = function_section;
        self.code_section = Some(self.arena.write_array(&codes));
        Ok(())
    }

    fn parse_locals(&mut self) -> Result<&'arena [LocalsRun]> {
        let count = self.reader.get_u32()? as usize;
        let mut runs = Vec::with_capacity(count);
        for _ in 0..count {
            let run_count = self.reader.get_u32()?;
            let value_type = ValueType::from_byte(self.reader.get_u8()?)?;
            runs.push(LocalsRun { count: run_count, value_type });
        }
        Ok(self.arena.write_array(&runs))
    }
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use wrt_format::binary::{ExportKind as EK, SectionId as SID};

    fn leb_u32(mut value: u32, out: &mut Vec<u8>) {
        loop {
            let byte = (value & 0x7F) as u8;
            value >>= 7;
            if value == 0 {
                out.push(byte);
                break;
            }
            out.push(byte | 0x80);
        }
    }

    fn section(id: SID, payload: &[u8], out: &mut Vec<u8>) {
        out.push(id as u8);
        leb_u32(payload.len() as u32, out);
        out.extend_from_slice(payload);
    }

    #[test]
    fn preamble_must_match_magic_and_version() {
        let arena = Arena::new(4096);
        let bytes = [0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];
        let mut parser = Parser::new(&arena, &bytes);
        assert!(parser.parse().is_ok());

        let arena2 = Arena::new(4096);
        let bad_magic = [0xFF, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];
        let mut parser2 = Parser::new(&arena2, &bad_magic);
        assert!(parser2.parse().is_err());
    }

    #[test]
    fn type_section_only_minimal_module() {
        let arena = Arena::new(4096);
        let mut module = alloc::vec![0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];

        // one function type: (i32, i32) -> i32
        let mut type_payload = Vec::new();
        leb_u32(1, &mut type_payload); // 1 type
        type_payload.push(FUNCTYPE_MARKER);
        leb_u32(2, &mut type_payload); // 2 params
        type_payload.push(ValueType::I32 as u8);
        type_payload.push(ValueType::I32 as u8);
        leb_u32(1, &mut type_payload); // 1 result
        type_payload.push(ValueType::I32 as u8);
        section(SID::Type, &type_payload, &mut module);

        let mut parser = Parser::new(&arena, &module);
        parser.parse().unwrap();

        let types = parser.type_section().unwrap();
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].params.len(), 2);
        assert_eq!(types[0].results, [ValueType::I32]);
    }

    #[test]
    fn type_function_export_add_module() {
        let arena = Arena::new(4096);
        let mut module = alloc::vec![0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];

        let mut type_payload = Vec::new();
        leb_u32(1, &mut type_payload);
        type_payload.push(FUNCTYPE_MARKER);
        leb_u32(2, &mut type_payload);
        type_payload.push(ValueType::I32 as u8);
        type_payload.push(ValueType::I32 as u8);
        leb_u32(1, &mut type_payload);
        type_payload.push(ValueType::I32 as u8);
        section(SID::Type, &type_payload, &mut module);

        let mut function_payload = Vec::new();
        leb_u32(1, &mut function_payload);
        leb_u32(0, &mut function_payload); // function 0 has type 0
        section(SID::Function, &function_payload, &mut module);

        let mut export_payload = Vec::new();
        leb_u32(1, &mut export_payload); // 1 export
        leb_u32(3, &mut export_payload); // name length
        export_payload.extend_from_slice(b"add");
        export_payload.push(EK::Func as u8);
        leb_u32(0, &mut export_payload); // function index 0
        section(SID::Export, &export_payload, &mut module);

        let mut parser = Parser::new(&arena, &module);
        parser.parse().unwrap();

        assert_eq!(parser.type_section().unwrap().len(), 1);
        assert_eq!(parser.function_section().unwrap().len(), 1);
        let exports = parser.export_section().unwrap();
        assert_eq!(exports.len(), 1);
        assert_eq!(exports[0].name, b"add\0");
        assert_eq!(exports[0].desc, ExportDesc::Function(0));
    }

    #[test]
    fn function_section_before_type_section_is_rejected() {
        let arena = Arena::new(4096);
        let mut module = alloc::vec![0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];
        let mut function_payload = Vec::new();
        leb_u32(1, &mut function_payload);
        leb_u32(0, &mut function_payload);
        section(SID::Function, &function_payload, &mut module);

        let mut parser = Parser::new(&arena, &module);
        assert!(parser.parse().is_err());
    }

    #[test]
    fn unsupported_opcode_in_code_section_fails_parse() {
        let arena = Arena::new(4096);
        let mut module = alloc::vec![0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];

        let mut type_payload = Vec::new();
        leb_u32(1, &mut type_payload);
        type_payload.push(FUNCTYPE_MARKER);
        leb_u32(0, &mut type_payload);
        leb_u32(0, &mut type_payload);
        section(SID::Type, &type_payload, &mut module);

        let mut function_payload = Vec::new();
        leb_u32(1, &mut function_payload);
        leb_u32(0, &mut function_payload);
        section(SID::Function, &function_payload, &mut module);

        let mut code_payload = Vec::new();
        leb_u32(1, &mut code_payload); // 1 code entry
        let mut body = Vec::new();
        leb_u32(0, &mut body); // no locals
        body.push(0xFE); // unknown opcode
        body.push(0x0B); // end
        leb_u32(body.len() as u32, &mut code_payload);
        code_payload.extend_from_slice(&body);
        section(SID::Code, &code_payload, &mut module);

        let mut parser = Parser::new(&arena, &module);
        assert!(parser.parse().is_err());
    }

    #[test]
    fn unknown_section_id_is_rejected() {
        let arena = Arena::new(4096);
        let mut module = alloc::vec![0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];
        module.push(0xFF); // no such section id
        leb_u32(1, &mut module);
        module.push(0x00);
        let mut parser = Parser::new(&arena, &module);
        assert!(parser.parse().is_err());
    }

    #[test]
    fn unknown_section_id_with_zero_size_is_still_rejected() {
        let arena = Arena::new(4096);
        let mut module = alloc::vec![0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];
        module.push(0xFF); // no such section id
        leb_u32(0, &mut module); // empty payload must not short-circuit the id check
        let mut parser = Parser::new(&arena, &module);
        assert!(parser.parse().is_err());
    }

    #[test]
    fn unknown_section_ids_are_skipped_by_declared_size_when_known() {
        // Custom section (id 0) is always skipped regardless of contents.
        let arena = Arena::new(4096);
        let mut module = alloc::vec![0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];
        section(SID::Custom, b"whatever garbage bytes", &mut module);
        let mut parser = Parser::new(&arena, &module);
        assert!(parser.parse().is_ok());
        assert!(parser.type_section().is_none());
    }
}
