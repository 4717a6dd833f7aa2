use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// 考生记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Section")]
    pub section: String,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            section: section.into(),
        }
    }

    /// 考场内的显示顺序：先按 Section，再按 ID
    pub fn display_order(&self, other: &Self) -> Ordering {
        natural_cmp(&self.section, &other.section).then_with(|| natural_cmp(&self.id, &other.id))
    }
}

/// 考场记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "Rooms")]
    pub name: String,
}

impl Room {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// 两边都是整数时按数值比较，否则按字符串比较；数字排在文本前
///
/// 逐对判断而不是整列判断：混合列里 "9" 仍排在 "10" 前面，这是有意的。
fn natural_cmp(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// 整个名单中最长的姓名（按字符数）
pub fn max_name_length(students: &[Student]) -> usize {
    students
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order_section_then_id() {
        let mut students = vec![
            Student::new("30", "C", "2"),
            Student::new("10", "A", "2"),
            Student::new("20", "B", "1"),
        ];
        students.sort_by(Student::display_order);
        let ids: Vec<&str> = students.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["20", "10", "30"]);
    }

    #[test]
    fn test_numeric_ids_compare_by_value() {
        assert_eq!(natural_cmp("9", "10"), Ordering::Less);
        assert_eq!(natural_cmp("B", "A"), Ordering::Greater);
        assert_eq!(natural_cmp("7", "A"), Ordering::Less);
    }

    #[test]
    fn test_mixed_column_sorts_numbers_by_value() {
        let mut students = vec![
            Student::new("A1", "C", "1"),
            Student::new("10", "B", "1"),
            Student::new("9", "A", "1"),
        ];
        students.sort_by(Student::display_order);
        let ids: Vec<&str> = students.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["9", "10", "A1"]);
    }

    #[test]
    fn test_max_name_length_counts_chars() {
        let students = vec![Student::new("1", "Ana", "A"), Student::new("2", "Zoë Ng", "A")];
        assert_eq!(max_name_length(&students), 6);
        assert_eq!(max_name_length(&[]), 0);
    }
}
