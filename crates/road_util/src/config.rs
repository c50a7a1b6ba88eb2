/// Characters that separate words in a delimited phrase (`road_system`,
/// `road-system`, `road system`). Phrases without any of these are split on
/// camel-case boundaries instead.
pub const WORD_DELIMITERS: [char; 3] = [' ', '-', '_'];
