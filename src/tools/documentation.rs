//! Static documentation for every builtin
//!
//! The table is built once from the single list in [`build_table`] and is
//! read-only afterwards.

use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

/// Documentation of one builtin
#[derive(Debug, Clone, Serialize)]
pub struct FunctionDoc {
    /// Function name
    pub name: &'static str,
    /// One-line summary
    pub summary: &'static str,
    /// Category used for grouping, e.g. `movement`
    pub category: &'static str,
    /// Parameters in call order
    pub parameters: Vec<ParameterDoc>,
    /// Worked examples
    pub examples: Vec<ExampleDoc>,
    /// Related functions
    pub see_also: Vec<&'static str>,
}

/// One parameter of a builtin
#[derive(Debug, Clone, Serialize)]
pub struct ParameterDoc {
    /// Parameter name
    pub name: &'static str,
    /// Expected kind: `number` or `string`
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// What it means
    pub description: &'static str,
    /// May it be omitted?
    pub optional: bool,
}

/// A runnable example: a shell-syntax script applied to an initial buffer.
///
/// `output` is the rendered result of the last form, or the final buffer
/// text when that result is the empty string.
#[derive(Debug, Clone, Serialize)]
pub struct ExampleDoc {
    /// Script in shell syntax
    pub input: &'static str,
    /// Initial buffer text
    pub buffer: &'static str,
    /// Expected output
    pub output: &'static str,
}

impl FunctionDoc {
    fn new(name: &'static str, category: &'static str, summary: &'static str) -> Self {
        FunctionDoc {
            name,
            summary,
            category,
            parameters: Vec::new(),
            examples: Vec::new(),
            see_also: Vec::new(),
        }
    }

    fn param(mut self, name: &'static str, kind: &'static str, description: &'static str) -> Self {
        self.parameters.push(ParameterDoc {
            name,
            kind,
            description,
            optional: false,
        });
        self
    }

    fn optional(mut self, name: &'static str, kind: &'static str, description: &'static str) -> Self {
        self.parameters.push(ParameterDoc {
            name,
            kind,
            description,
            optional: true,
        });
        self
    }

    fn example(mut self, buffer: &'static str, input: &'static str, output: &'static str) -> Self {
        self.examples.push(ExampleDoc {
            input,
            buffer,
            output,
        });
        self
    }

    fn see(mut self, names: &[&'static str]) -> Self {
        self.see_also.extend_from_slice(names);
        self
    }
}

const COUNT: &str = "Repeat count, default 1";

fn build_table() -> Vec<FunctionDoc> {
    use FunctionDoc as F;

    vec![
        // movement
        F::new("forward-char", "movement", "Move point forward by characters")
            .optional("count", "number", COUNT)
            .example("Hello world", "forward-char 6; point", "7")
            .see(&["backward-char", "goto-char"]),
        F::new("backward-char", "movement", "Move point backward by characters")
            .optional("count", "number", COUNT)
            .example("Hello world", "end-of-buffer; backward-char 5; point", "7")
            .see(&["forward-char"]),
        F::new("forward-word", "movement", "Move point to the end of the next word")
            .optional("count", "number", COUNT)
            .example("Hello world test", "forward-word 2; point", "12")
            .see(&["backward-word", "kill-word"]),
        F::new("backward-word", "movement", "Move point to the start of the previous word")
            .optional("count", "number", COUNT)
            .example("Hello world test", "end-of-buffer; backward-word; point", "13")
            .see(&["forward-word", "backward-kill-word"]),
        F::new("goto-char", "movement", "Move point to a position, clamped to the buffer")
            .param("position", "number", "1-based target position")
            .example("Hello world", r#"goto-char 7; insert "big ""#, "Hello big world")
            .see(&["point", "goto-line"]),
        F::new("goto-line", "movement", "Move point to the start of a line")
            .param("line", "number", "1-based line number, clamped to the buffer")
            .example("one\ntwo\nthree", "goto-line 3; point", "9")
            .see(&["line-number-at-pos"]),
        F::new("beginning-of-line", "movement", "Move point to the start of the current line")
            .example("one\ntwo", "goto-char 7; beginning-of-line; point", "5")
            .see(&["end-of-line"]),
        F::new("end-of-line", "movement", "Move point to the end of the current line")
            .example("one\ntwo", "end-of-line; point", "4")
            .see(&["beginning-of-line"]),
        F::new("beginning-of-buffer", "movement", "Move point to the start of the buffer")
            .example("Hello", "end-of-buffer; beginning-of-buffer; point", "1")
            .see(&["end-of-buffer", "point-min"]),
        F::new("end-of-buffer", "movement", "Move point to the end of the buffer")
            .example("Hello", "end-of-buffer; point", "6")
            .see(&["beginning-of-buffer", "point-max"]),
        // position
        F::new("point", "position", "Return the current position of point")
            .example("Hello", "point", "1")
            .see(&["mark", "goto-char"]),
        F::new("mark", "position", "Return the current position of the mark")
            .example("Hello", "goto-char 3; set-mark; mark", "3")
            .see(&["point", "set-mark"]),
        F::new("point-min", "position", "Return the smallest valid position")
            .example("Hello", "point-min", "1")
            .see(&["point-max"]),
        F::new("point-max", "position", "Return the largest valid position")
            .example("Hello", "point-max", "6")
            .see(&["point-min", "buffer-size"]),
        F::new("buffer-size", "buffer", "Return the number of characters in the buffer")
            .example("Hello world", "buffer-size", "11")
            .see(&["point-max"]),
        F::new("current-column", "position", "Return the 0-based column of point")
            .example("Hello world", "goto-char 6; current-column", "5")
            .see(&["line-number-at-pos"]),
        F::new("line-number-at-pos", "position", "Return the 1-based line number of point")
            .example("one\ntwo\nthree", "goto-char 9; line-number-at-pos", "3")
            .see(&["goto-line", "current-column"]),
        F::new("region-beginning", "region", "Return the smaller of point and mark")
            .example("Hello world", "goto-char 9; set-mark; goto-char 3; region-beginning", "3")
            .see(&["region-end"]),
        F::new("region-end", "region", "Return the larger of point and mark")
            .example("Hello world", "goto-char 9; set-mark; goto-char 3; region-end", "9")
            .see(&["region-beginning"]),
        // mark
        F::new("set-mark", "mark", "Set the mark at point")
            .example("Hello world", "goto-char 7; set-mark; end-of-buffer; delete-region", "Hello ")
            .see(&["set-mark-command", "mark"]),
        F::new("set-mark-command", "mark", "Set the mark at a position, or at point")
            .optional("position", "number", "1-based position, default point")
            .example("Hello world", "set-mark-command 6; end-of-buffer; delete-region", "Hello")
            .see(&["set-mark"]),
        F::new("exchange-point-and-mark", "mark", "Swap point and mark")
            .example("Hello world", "goto-char 4; set-mark; goto-char 9; exchange-point-and-mark; point", "4")
            .see(&["set-mark"]),
        F::new("mark-whole-buffer", "mark", "Put the mark at the start and point at the end")
            .example("Hello world", r#"mark-whole-buffer; replace-region "X""#, "X")
            .see(&["delete-region", "replace-region"]),
        F::new("mark-word", "mark", "Select the word at point")
            .example("Hello world", "goto-char 8; mark-word; delete-region", "Hello ")
            .see(&["mark-line"]),
        F::new("mark-line", "mark", "Select whole lines starting with the current one")
            .optional("count", "number", "Number of lines, default 1")
            .example("one\ntwo\nthree", "goto-char 6; mark-line; delete-region", "one\nthree")
            .see(&["mark-word", "delete-line"]),
        // editing
        F::new("insert", "editing", "Insert text at point")
            .param("text", "string", "Text to insert")
            .example("world", r#"insert "Hello ""#, "Hello world")
            .see(&["replace-region"]),
        F::new("delete-char", "editing", "Delete characters after point")
            .optional("count", "number", COUNT)
            .example("Hello world", "goto-char 7; delete-char 5", "Hello ")
            .see(&["delete-backward-char"]),
        F::new("delete-backward-char", "editing", "Delete characters before point")
            .optional("count", "number", COUNT)
            .example("Hello world", "end-of-buffer; delete-backward-char 6", "Hello")
            .see(&["delete-char"]),
        F::new("delete-region", "region", "Delete the text between point and mark")
            .example("Hello world", "set-mark; goto-char 7; delete-region", "world")
            .see(&["replace-region", "set-mark"]),
        F::new("replace-region", "region", "Replace the text between point and mark")
            .param("text", "string", "Replacement text")
            .example("Hello world", r#"set-mark; goto-char 6; replace-region "Goodbye""#, "Goodbye world")
            .see(&["delete-region"]),
        F::new("delete-line", "editing", "Delete whole lines starting with the current one")
            .optional("count", "number", "Number of lines, default 1")
            .example("one\ntwo\nthree", "goto-line 2; delete-line", "one\nthree")
            .see(&["kill-line"]),
        F::new("kill-line", "editing", "Delete the rest of the line after the character at point")
            .optional("count", "number", "Number of whole lines to delete instead")
            .example("First line content\nSecond line", "goto-char 8; kill-line", "First li\nSecond line")
            .see(&["delete-line"]),
        F::new("kill-word", "editing", "Delete forward to the end of a word")
            .optional("count", "number", COUNT)
            .example("Hello world test", "goto-char 3; kill-word", "He world test")
            .see(&["backward-kill-word", "forward-word"]),
        F::new("backward-kill-word", "editing", "Delete backward to the start of a word")
            .optional("count", "number", COUNT)
            .example("Hello world test", "end-of-buffer; backward-kill-word", "Hello world ")
            .see(&["kill-word", "backward-word"]),
        F::new("buffer-substring", "buffer", "Return the text between two positions")
            .param("start", "number", "1-based start position")
            .param("end", "number", "1-based end position, exclusive; -1 means end of buffer")
            .example("abcdef", "buffer-substring 2 4", r#""bc""#)
            .see(&["substring"]),
        // search
        F::new("search-forward", "search", "Search forward for literal text")
            .param("text", "string", "Text to find")
            .example("Hello world", r#"search-forward "world"; point"#, "12")
            .see(&["search-backward", "replace-match"]),
        F::new("search-backward", "search", "Search backward for literal text")
            .param("text", "string", "Text to find")
            .example("one two one", r#"end-of-buffer; search-backward "one"; point"#, "12")
            .see(&["search-forward"]),
        F::new("re-search-forward", "search", "Search forward for a regular expression")
            .param("regexp", "string", "Pattern to find")
            .example("id: 42", r#"re-search-forward "[0-9]+"; point"#, "7")
            .see(&["re-search-backward", "replace-match"]),
        F::new("re-search-backward", "search", "Search backward for a regular expression")
            .param("regexp", "string", "Pattern to find")
            .example("a1 b22 c", r#"end-of-buffer; re-search-backward "[0-9]+"; point"#, "7")
            .see(&["re-search-forward"]),
        F::new("replace-match", "search", "Replace the text matched by the last search")
            .param("text", "string", "Replacement text")
            .example("Hello world", r#"search-forward "world"; replace-match "earth""#, "Hello earth")
            .see(&["search-forward", "re-search-forward"]),
        F::new("looking-at", "search", "Test whether the text after point matches")
            .param("pattern", "string", "Regular expression, or literal text if it does not compile")
            .example("Hello 123", r#"goto-char 7; looking-at "[0-9]+""#, "t")
            .see(&["looking-back"]),
        F::new("looking-back", "search", "Test whether the text before point matches")
            .param("pattern", "string", "Regular expression, or literal text if it does not compile")
            .example("Hello 123", r#"end-of-buffer; looking-back "[0-9]+""#, "t")
            .see(&["looking-at"]),
        // string
        F::new("concat", "string", "Join strings")
            .optional("strings", "string", "Any number of strings")
            .example("", r#"concat "Hello" " " "world""#, r#""Hello world""#)
            .see(&["substring"]),
        F::new("substring", "string", "Return part of a string")
            .param("string", "string", "Source string")
            .param("start", "number", "1-based start index")
            .optional("end", "number", "1-based end index, exclusive")
            .example("", r#"substring "Hello world" 7"#, r#""world""#)
            .see(&["buffer-substring", "length"]),
        F::new("length", "string", "Return the number of characters in a string")
            .param("string", "string", "String to measure")
            .example("", r#"length "Hello""#, "5")
            .see(&["buffer-size"]),
        F::new("upcase", "string", "Convert a string to upper case")
            .param("string", "string", "String to convert")
            .example("", r#"upcase "hello""#, r#""HELLO""#)
            .see(&["downcase", "capitalize"]),
        F::new("downcase", "string", "Convert a string to lower case")
            .param("string", "string", "String to convert")
            .example("", r#"downcase "HeLLo""#, r#""hello""#)
            .see(&["upcase"]),
        F::new("capitalize", "string", "Upper-case the first character and lower-case the rest")
            .param("string", "string", "String to convert")
            .example("", r#"capitalize "hello world""#, r#""Hello world""#)
            .see(&["upcase"]),
        F::new("string-match", "string", "Return the index of the first match in a string, or nil")
            .param("regexp", "string", "Pattern, or literal text if it does not compile")
            .param("string", "string", "String to search")
            .example("", r#"string-match "[0-9]+" "ab12cd""#, "2")
            .see(&["replace-regexp-in-string"]),
        F::new("replace-regexp-in-string", "string", "Replace every match of a regular expression")
            .param("regexp", "string", "Pattern to replace")
            .param("replacement", "string", "Replacement; $1 refers to a capture group")
            .param("string", "string", "String to edit")
            .example("", r#"replace-regexp-in-string "[0-9]+" "N" "a1 b22""#, r#""aN bN""#)
            .see(&["string-match"]),
    ]
}

lazy_static! {
    static ref TABLE: Vec<FunctionDoc> = build_table();
    static ref INDEX: HashMap<&'static str, usize> = TABLE
        .iter()
        .enumerate()
        .map(|(i, doc)| (doc.name, i))
        .collect();
}

/// Documentation for `name`
pub fn lookup(name: &str) -> Option<&'static FunctionDoc> {
    INDEX.get(name).map(|&i| &TABLE[i])
}

/// Every entry, sorted by name
pub fn all() -> Vec<&'static FunctionDoc> {
    let mut docs: Vec<&'static FunctionDoc> = TABLE.iter().collect();
    docs.sort_by_key(|doc| doc.name);
    docs
}

/// Entries in `category`, sorted by name
pub fn by_category(category: &str) -> Vec<&'static FunctionDoc> {
    all()
        .into_iter()
        .filter(|doc| doc.category == category)
        .collect()
}

/// Distinct categories, sorted
pub fn categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = TABLE.iter().map(|doc| doc.category).collect();
    categories.sort_unstable();
    categories.dedup();
    categories
}

/// Number of documented functions
pub fn count() -> usize {
    TABLE.len()
}

/// The whole table as pretty-printed JSON, sorted by name
pub fn to_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&all())
}
