/// Four lines of five-character verse, each closed by punctuation. Packs exactly into a
/// box six characters wide.
pub const QUATRAIN: &str = "春眠不觉晓，处处闻啼鸟。夜来风雨声，花落知多少。";

pub const QUOTED: &str = "“你好。”";

/// Ends in a two-character line at width 5 when left alone.
pub const ORPHANED: &str = "一二三四字了";

/// Mixed prose: nested brackets, an ellipsis, Latin and digits, and a final orphan at
/// several widths.
pub const PARAGRAPH: &str = "他说：“今天（星期三）我们去公园。”她回答：“好啊，\
    不过要带上雨伞……”Rust 1.85 版本发布了。《排版》这本书讲的是标点挤压、行尾调整，\
    以及避免孤字。最后一行只有一个字了";

/// Two paragraphs separated by a hard break.
pub const TWO_PARAGRAPHS: &str = "一二三四字了\n“你好。”一二三四五六七八九十了";
