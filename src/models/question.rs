use serde::{Deserialize, Serialize};
use std::fmt;

/// 选项字母表
pub const OPTION_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// 是否为合法的选项字母
pub fn is_option_letter(c: char) -> bool {
    OPTION_LETTERS.contains(&c)
}

/// 单道选择题
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: Options,
    pub answer: Answer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl QuestionRecord {
    pub fn new(question: impl Into<String>, options: Options, answer: Answer) -> Self {
        Self {
            question: question.into(),
            options,
            answer,
            category: None,
        }
    }

    /// 题干、选项、答案三者齐全
    pub fn is_complete(&self) -> bool {
        !self.question.trim().is_empty() && !self.options.is_empty() && !self.answer.is_empty()
    }

    /// 字母答案是否对应某个选项
    ///
    /// 文本答案无法校验，返回 `None`
    pub fn answer_in_options(&self) -> Option<bool> {
        self.answer
            .as_letter()
            .map(|letter| self.options.get(&letter.to_string()).is_some())
    }
}

/// 正确答案
///
/// 答案行形如 `C. 30 جيجابايت` 时只保留字母，否则保留原始文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Answer {
    Letter(char),
    Text(String),
}

impl Answer {
    pub fn is_empty(&self) -> bool {
        match self {
            Answer::Letter(_) => false,
            Answer::Text(text) => text.trim().is_empty(),
        }
    }

    pub fn as_letter(&self) -> Option<char> {
        match self {
            Answer::Letter(letter) => Some(*letter),
            Answer::Text(_) => None,
        }
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if is_option_letter(c) => Answer::Letter(c),
            _ => Answer::Text(value),
        }
    }
}

impl From<Answer> for String {
    fn from(value: Answer) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Letter(letter) => write!(f, "{}", letter),
            Answer::Text(text) => f.write_str(text),
        }
    }
}

/// 按出现顺序保存的选项表（字母 → 选项文本）
///
/// JSON 中序列化为对象，键的顺序与源文本中字母出现的顺序一致
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    entries: Vec<(String, String)>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入选项；重复的键保留原位置，值被覆盖
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        let key = key.into();
        let text = text.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((key, text)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Options {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut options = Options::new();
        for (key, text) in iter {
            options.insert(key, text);
        }
        options
    }
}

impl Serialize for Options {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, text) in &self.entries {
            map.serialize_entry(key, text)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Options {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{MapAccess, Visitor};

        struct OptionsVisitor;

        impl<'de> Visitor<'de> for OptionsVisitor {
            type Value = Options;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object mapping option letters to option text")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut options = Options::new();
                while let Some((key, text)) = access.next_entry::<String, String>()? {
                    options.insert(key, text);
                }
                Ok(options)
            }
        }

        deserializer.deserialize_map(OptionsVisitor)
    }
}
