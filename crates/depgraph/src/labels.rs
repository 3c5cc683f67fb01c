use std::collections::HashMap;

/// 节点标签分配器
///
/// 首次见到的节点 key 分配新标签，之后返回同一个标签。
/// 标签序列: A..Z, AA..AZ, BA..ZZ, AAA...
#[derive(Debug, Clone, Default)]
pub struct Labels {
    /// (节点 key, 标签)，按分配顺序
    entries: Vec<(String, String)>,
    by_key: HashMap<String, usize>,
    by_label: HashMap<String, usize>,
}

impl Labels {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取或分配标签
    pub fn label(&mut self, key: &str) -> &str {
        let index = match self.by_key.get(key) {
            Some(&index) => index,
            None => {
                let index = self.entries.len();
                let label = Self::label_at(index);
                self.by_key.insert(key.to_string(), index);
                self.by_label.insert(label.clone(), index);
                self.entries.push((key.to_string(), label));
                index
            }
        };
        &self.entries[index].1
    }

    /// 已分配的标签
    pub fn get(&self, key: &str) -> Option<&str> {
        self.by_key
            .get(key)
            .map(|&index| self.entries[index].1.as_str())
    }

    /// 反查节点 key
    pub fn key_of(&self, label: &str) -> Option<&str> {
        self.by_label
            .get(label)
            .map(|&index| self.entries[index].0.as_str())
    }

    /// (标签, 节点 key)，按分配顺序
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, label)| (label.as_str(), key.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 第 index 个标签 (双射 26 进制)
    #[doc(hidden)]
    pub fn label_at(mut index: usize) -> String {
        let mut chars = Vec::new();
        loop {
            chars.push(char::from(b'A' + (index % 26) as u8));
            if index < 26 {
                break;
            }
            index = index / 26 - 1;
        }
        chars.iter().rev().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_label_at_sequence() {
        assert_eq!(Labels::label_at(0), "A");
        assert_eq!(Labels::label_at(25), "Z");
        assert_eq!(Labels::label_at(26), "AA");
        assert_eq!(Labels::label_at(27), "AB");
        assert_eq!(Labels::label_at(51), "AZ");
        assert_eq!(Labels::label_at(52), "BA");
        assert_eq!(Labels::label_at(701), "ZZ");
        assert_eq!(Labels::label_at(702), "AAA");
    }

    #[test]
    fn test_label_allocates_in_order() {
        let mut labels = Labels::new();
        assert_eq!(labels.label("example.com/app/a"), "A");
        assert_eq!(labels.label("example.com/app/b"), "B");
        assert_eq!(labels.label("example.com/app/c"), "C");
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn test_label_is_stable() {
        let mut labels = Labels::new();
        let first = labels.label("pkg").to_string();
        labels.label("other");
        assert_eq!(labels.label("pkg"), first);
        assert_eq!(labels.label("pkg"), first);
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn test_labels_unique_past_alphabet() {
        let mut labels = Labels::new();
        let mut seen = HashSet::new();
        for i in 0..1000 {
            let label = labels.label(&format!("pkg/{}", i)).to_string();
            assert!(label.chars().all(|c| c.is_ascii_uppercase()));
            assert!(seen.insert(label));
        }
        assert_eq!(labels.get("pkg/26"), Some("AA"));
    }

    #[test]
    fn test_get_and_key_of() {
        let mut labels = Labels::new();
        assert!(labels.is_empty());
        assert_eq!(labels.get("x"), None);

        labels.label("x");
        labels.label("y");
        assert_eq!(labels.get("y"), Some("B"));
        assert_eq!(labels.key_of("A"), Some("x"));
        assert_eq!(labels.key_of("C"), None);
    }

    #[test]
    fn test_iter_in_allocation_order() {
        let mut labels = Labels::new();
        labels.label("zeta");
        labels.label("alpha");
        let pairs: Vec<_> = labels.iter().collect();
        assert_eq!(pairs, vec![("A", "zeta"), ("B", "alpha")]);
    }
}
