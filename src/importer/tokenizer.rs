// ==========================================
// 楼盘装修选材系统 - 行分词器
// ==========================================
// 职责: 单行文本 → 有序字段序列
// 规则: 逗号分隔; 双引号包裹的字段内逗号失去分隔意义,
//       "" 为转义的字面引号; 非包裹字段原样保留（此阶段不 TRIM）
// ==========================================

/// 对单行文本分词
///
/// 约定:
/// - 末尾字段总是产出,无需行尾逗号
/// - 引号空字段与裸空字段不做区分,都产出 ""
/// - 引号只在字段起始位置开启包裹,字段中途出现按字面处理
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    // "" 为转义引号,单个 " 结束包裹
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
        } else {
            match c {
                '"' if field.is_empty() => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut field)),
                _ => field.push(c),
            }
        }
    }

    fields.push(field);
    fields
}
