//! CLI 通用输出格式化模块
//!
//! 提供表格和 JSON 两种输出格式

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// 可输出为表格行的数据 trait
pub trait TableRow {
    /// 返回表格列标题
    fn headers() -> Vec<&'static str>;

    /// 返回该项的表格行数据
    fn row(&self) -> Vec<String>;
}

/// 按列宽对齐一行
fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(c, w)| format!("{:<width$}", c, width = w))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// 渲染表格文本
pub fn render_table<T: TableRow>(items: &[T]) -> Vec<String> {
    let headers: Vec<String> = T::headers().into_iter().map(str::to_string).collect();
    let rows: Vec<Vec<String>> = items.iter().map(TableRow::row).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut lines = vec![format_line(&headers, &widths)];
    lines.extend(rows.iter().map(|row| format_line(row, &widths)));
    lines
}

/// 表格格式输出
pub fn print_table<T: TableRow>(items: &[T]) {
    if items.is_empty() {
        println!("{}", "没有查询到任何记录".yellow());
        return;
    }

    let lines = render_table(items);
    if let Some((header, rows)) = lines.split_first() {
        println!("{}", header.bold());
        for row in rows {
            println!("{}", row);
        }
    }
    println!("\n共 {} 条", items.len().to_string().cyan());
}

/// JSON 格式输出
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// 根据格式参数选择输出方式
pub fn output_list<T: TableRow + Serialize>(items: &[T], json: bool) -> Result<()> {
    if json {
        print_json(items)
    } else {
        print_table(items);
        Ok(())
    }
}

/// 输出单条记录，表格格式为竖排的字段列表
pub fn output_one<T: TableRow + Serialize>(item: &T, json: bool) -> Result<()> {
    if json {
        return print_json(item);
    }

    let headers = T::headers();
    let width = headers.iter().map(|h| h.chars().count()).max().unwrap_or(0);
    for (header, value) in headers.iter().zip(item.row()) {
        let header = format!("{:<width$}", header, width = width);
        println!("{}  {}", header.bold(), value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, &'static str);

    impl TableRow for Row {
        fn headers() -> Vec<&'static str> {
            vec!["ID", "NAME"]
        }

        fn row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let lines = render_table(&[Row("z1", "zone-a"), Row("zone-id-2", "b")]);
        assert_eq!(lines[0], "ID         NAME");
        assert_eq!(lines[1], "z1         zone-a");
        assert_eq!(lines[2], "zone-id-2  b");
    }
}
