//! Page Module
//!
//! HTMLドキュメント全体（head、スタイルシート、ヘッダー、ナビゲーション、セクション、フッター）を出力するモジュール。
//! スタイルはすべてインラインで、外部リソースは参照しません。

use std::io::Write;

use crate::error::MenuError;
use crate::formatter::FieldFormatter;
use crate::logo::LogoImage;
use crate::section::MenuSection;

/// 表示するシートが1つもない場合のメッセージ
pub(crate) const NO_DATA_MESSAGE: &str = "Nessun dato disponibile nel menu";

/// ページ共通の情報
#[derive(Debug)]
pub(crate) struct PageContext<'a> {
    /// 店舗名（タイトル、見出し、フッターに使用）
    pub venue_name: &'a str,

    /// 生成日時（整形済み）
    pub generated_at: String,

    /// ロゴ画像（ない場合は`img`タグを出力しない）
    pub logo: Option<LogoImage>,
}

/// HTMLページを出力
///
/// # 引数
///
/// * `writer` - 出力先のライター
/// * `context` - ページ共通の情報
/// * `sections` - セクション（シート順）。空の場合は「データなし」のブロックを出力
/// * `formatter` - フィールドフォーマッター
///
/// # 戻り値
///
/// * `Ok(())` - 出力に成功した場合
/// * `Err(MenuError)` - エラーが発生した場合
pub(crate) fn render_page<W: Write>(
    writer: &mut W,
    context: &PageContext<'_>,
    sections: &[MenuSection],
    formatter: &FieldFormatter,
) -> Result<(), MenuError> {
    let venue = formatter.escape_html(context.venue_name);

    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, "<html lang=\"it\">")?;
    writeln!(writer, "<head>")?;
    writeln!(writer, "    <meta charset=\"UTF-8\">")?;
    writeln!(
        writer,
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    )?;
    writeln!(writer, "    <title>Menu Completo {}</title>", venue)?;
    writeln!(writer, "    <style>")?;
    write!(writer, "{}", STYLESHEET)?;
    writeln!(writer, "    </style>")?;
    writeln!(writer, "</head>")?;
    writeln!(writer, "<body>")?;
    writeln!(writer, "    <div class=\"container\">")?;

    // ヘッダー
    writeln!(writer, "        <div class=\"header\" id=\"top\">")?;
    if let Some(logo) = &context.logo {
        writeln!(
            writer,
            "            <img src=\"{}\" alt=\"{} Logo\" class=\"logo\">",
            logo.data_uri(),
            venue
        )?;
    }
    writeln!(writer, "            <h1>🍽️ Menu Completo {}</h1>", venue)?;
    writeln!(writer, "            <p>Esperienza culinaria unica</p>")?;
    writeln!(writer, "        </div>")?;
    writeln!(writer)?;

    // ナビゲーション
    writeln!(writer, "        <div class=\"navigation\">")?;
    for section in sections {
        writeln!(
            writer,
            "            <a href=\"#{}\" class=\"nav-link\">{}</a>",
            formatter.escape_html(&section.id),
            formatter.escape_html(&section.title)
        )?;
    }
    writeln!(writer, "        </div>")?;
    writeln!(writer)?;

    // セクション
    if sections.is_empty() {
        writeln!(writer, "<div class=\"no-data\">{}</div>", NO_DATA_MESSAGE)?;
    }
    for section in sections {
        render_section(writer, section, formatter)?;
    }
    writeln!(writer)?;

    // フッター
    writeln!(writer, "        <div class=\"footer\">")?;
    writeln!(
        writer,
        "            <p>Generato il {} | Menu {}</p>",
        context.generated_at, venue
    )?;
    writeln!(writer, "        </div>")?;
    writeln!(writer, "    </div>")?;
    writeln!(writer, "</body>")?;
    writeln!(writer, "</html>")?;

    writer.flush()?;
    Ok(())
}

/// 1セクション分（見出し + レイアウトに応じた品目）を出力
fn render_section<W: Write>(
    writer: &mut W,
    section: &MenuSection,
    formatter: &FieldFormatter,
) -> Result<(), MenuError> {
    writeln!(
        writer,
        "<div class=\"menu-section\" id=\"{}\">",
        formatter.escape_html(&section.id)
    )?;
    writeln!(
        writer,
        "<h2 class=\"section-title\">{} <a href=\"#top\" class=\"back-to-top\">↑</a></h2>",
        formatter.escape_html(&section.title)
    )?;
    section.layout.render(section, formatter, writer)?;
    writeln!(writer, "</div>")?;
    Ok(())
}

/// レスポンシブなスタイルシート（480px以下でレイアウトを縦積みに切り替える）
const STYLESHEET: &str = r#"        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            padding: 10px;
        }

        .container {
            max-width: 100%;
            margin: 0 auto;
            background: white;
            border-radius: 15px;
            box-shadow: 0 10px 30px rgba(0,0,0,0.3);
            overflow: hidden;
        }

        .header {
            background: linear-gradient(45deg, #f39c12, #e67e22);
            color: white;
            text-align: center;
            padding: 20px;
        }

        .header h1 {
            font-size: 2em;
            margin-bottom: 10px;
            text-shadow: 2px 2px 4px rgba(0,0,0,0.3);
        }

        .header p {
            font-size: 1em;
            opacity: 0.9;
        }

        .logo {
            width: 100%;
            max-width: 100%;
            height: auto;
            margin: 0 auto 20px auto;
            display: block;
            border-radius: 15px;
            background: white;
            padding: 20px;
            box-shadow: 0 6px 12px rgba(0,0,0,0.3);
            border: 3px solid #2c3e50;
        }

        .navigation {
            background: #34495e;
            padding: 15px;
            text-align: center;
        }

        .nav-link {
            color: white;
            text-decoration: none;
            margin: 5px 8px;
            padding: 8px 12px;
            border-radius: 8px;
            background: #f39c12;
            transition: all 0.3s ease;
            display: inline-block;
            font-size: 0.9em;
            font-weight: 500;
        }

        .nav-link:hover {
            background: #e67e22;
            transform: translateY(-2px);
            box-shadow: 0 4px 8px rgba(0,0,0,0.2);
        }

        .menu-section {
            padding: 20px;
            border-bottom: 1px solid #eee;
        }

        .menu-section:last-child {
            border-bottom: none;
        }

        .section-title {
            position: relative;
            font-size: 1.4em;
            text-align: center;
            background: linear-gradient(45deg, #f39c12, #e67e22);
            color: white;
            padding: 12px;
            border-radius: 10px;
            margin: 15px 0;
        }

        .back-to-top {
            position: absolute;
            right: 15px;
            top: 50%;
            transform: translateY(-50%);
            color: white;
            text-decoration: none;
            font-size: 1.2em;
            background: rgba(255,255,255,0.2);
            padding: 8px;
            border-radius: 50%;
            transition: all 0.3s ease;
            width: 32px;
            height: 32px;
            display: flex;
            align-items: center;
            justify-content: center;
        }

        .back-to-top:hover {
            background: rgba(255,255,255,0.3);
            transform: translateY(-50%) scale(1.1);
        }

        .menu-item {
            display: flex;
            flex-direction: column;
            align-items: flex-start;
            padding: 12px;
            margin: 8px 0;
            background: #f8f9fa;
            border-radius: 8px;
            border-left: 3px solid #3498db;
            transition: all 0.3s ease;
        }

        .menu-item:hover {
            transform: translateX(5px);
            box-shadow: 0 5px 15px rgba(0,0,0,0.1);
        }

        .item-header {
            display: flex;
            justify-content: space-between;
            align-items: center;
            width: 100%;
            margin-bottom: 4px;
        }

        .item-name {
            font-weight: bold;
            font-size: 1em;
            color: #2c3e50;
            flex: 1;
            word-wrap: break-word;
            line-height: 1.3;
        }

        .item-producer {
            font-weight: bold;
            font-size: 1em;
            color: #2c3e50;
        }

        .item-price {
            font-size: 1.1em;
            font-weight: bold;
            color: #e74c3c;
            margin-left: 15px;
            white-space: nowrap;
            flex-shrink: 0;
        }

        .price-table {
            display: table;
            width: 100%;
            margin-top: 10px;
        }

        .price-header {
            display: table-header-group;
            background: #ecf0f1;
        }

        .price-row {
            display: table-row;
        }

        .price-cell {
            display: table-cell;
            padding: 6px 10px;
            text-align: center;
            border-right: 1px solid #bdc3c7;
            font-weight: bold;
            color: #2c3e50;
            font-size: 0.9em;
        }

        .price-cell:last-child {
            border-right: none;
        }

        .price-value {
            font-size: 1em;
            font-weight: bold;
            color: #e74c3c;
        }

        .item-description {
            font-size: 0.8em;
            color: #7f8c8d;
            margin-top: 4px;
            font-style: italic;
        }

        .no-data {
            text-align: center;
            padding: 40px;
            color: #7f8c8d;
            font-style: italic;
        }

        .footer {
            background: #2c3e50;
            color: white;
            text-align: center;
            padding: 15px;
            font-size: 0.8em;
        }

        @media (max-width: 480px) {
            .header h1 {
                font-size: 1.6em;
            }

            .logo {
                padding: 15px;
            }

            .item-header {
                flex-direction: column;
                align-items: flex-start;
            }

            .item-price {
                margin-left: 0;
                margin-top: 5px;
                align-self: flex-end;
            }
        }
"#;
