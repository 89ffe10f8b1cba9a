//! Mapping byte offsets to lines and columns.
//!
//! Lines and columns in rendered diagnostics are 1-based; columns count
//! characters, not bytes.

/// Byte offset of every line start, for binary-search lookups.
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// `offsets[0]` is 0; `offsets[i]` is the byte after the `i`th newline.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        offsets.extend(
            memchr::memchr_iter(b'\n', source.as_bytes())
                .map(|i| u32::try_from(i + 1).unwrap_or(u32::MAX)),
        );
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let index = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(index + 1).unwrap_or(u32::MAX)
    }

    /// 1-based `(line, column)` of `offset` in `source`.
    ///
    /// Offsets past the end clamp to the end of the source.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let offset = offset.min(u32::try_from(source.len()).unwrap_or(u32::MAX));
        let line = self.line_from_offset(offset);
        let start = self.line_start(line);
        let prefix = source
            .get(start as usize..offset as usize)
            .unwrap_or_default();
        let column = u32::try_from(prefix.chars().count() + 1).unwrap_or(u32::MAX);
        (line, column)
    }

    /// Text of 1-based `line`, without its newline. Empty if there is no
    /// such line.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> &'s str {
        let Some(&start) = self.offsets.get((line as usize).wrapping_sub(1)) else {
            return "";
        };
        let start = start as usize;
        let end = self
            .offsets
            .get(line as usize)
            .map_or(source.len(), |&next| next as usize);
        source
            .get(start..end)
            .unwrap_or_default()
            .trim_end_matches(['\n', '\r'])
    }

    fn line_start(&self, line: u32) -> u32 {
        let index = (line as usize).saturating_sub(1);
        self.offsets.get(index).copied().unwrap_or(0)
    }
}
