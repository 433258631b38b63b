use std::fmt::Write;

/// 极简 SVG 文档构建器（写入 String，数值统一保留两位小数）
pub struct SvgWriter {
    buf: String,
}

pub fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn dash_attr(dashed: bool) -> &'static str {
    if dashed {
        r#" stroke-dasharray="3 3""#
    } else {
        ""
    }
}

impl SvgWriter {
    pub fn begin(width: u32, height: u32) -> Result<Self, std::fmt::Error> {
        let mut buf = String::new();
        write!(
            buf,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = width,
            h = height
        )?;
        Ok(Self { buf })
    }

    pub fn finish(mut self) -> String {
        self.buf.push_str("</svg>");
        self.buf
    }

    pub fn open_group(&mut self, class: &str, field: Option<&str>) -> std::fmt::Result {
        match field {
            Some(field) => write!(
                self.buf,
                r#"<g class="{}" data-field="{}">"#,
                class,
                escape_text(field)
            ),
            None => write!(self.buf, r#"<g class="{}">"#, class),
        }
    }

    pub fn close_group(&mut self) {
        self.buf.push_str("</g>");
    }

    pub fn rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: &str,
        opacity: f64,
    ) -> std::fmt::Result {
        write!(
            self.buf,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" fill-opacity="{}"/>"#,
            x, y, width, height, fill, opacity
        )
    }

    pub fn line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        stroke: &str,
        opacity: f64,
        dashed: bool,
    ) -> std::fmt::Result {
        write!(
            self.buf,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-opacity="{}"{}/>"#,
            from.0,
            from.1,
            to.0,
            to.1,
            stroke,
            opacity,
            dash_attr(dashed)
        )
    }

    pub fn stroke_path(
        &mut self,
        d: &str,
        stroke: &str,
        stroke_width: f64,
        opacity: f64,
    ) -> std::fmt::Result {
        write!(
            self.buf,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-opacity="{}"/>"#,
            d, stroke, stroke_width, opacity
        )
    }

    pub fn fill_path(&mut self, d: &str, fill: &str, fill_opacity: f64) -> std::fmt::Result {
        write!(
            self.buf,
            r#"<path d="{}" fill="{}" fill-opacity="{}" stroke="none"/>"#,
            d, fill, fill_opacity
        )
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, opacity: f64) -> std::fmt::Result {
        write!(
            self.buf,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" fill-opacity="{}"/>"#,
            cx, cy, r, fill, opacity
        )
    }

    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        fill: &str,
        font_size: u32,
    ) -> std::fmt::Result {
        write!(
            self.buf,
            r#"<text x="{:.2}" y="{:.2}" fill="{}" font-size="{}" text-anchor="middle">{}</text>"#,
            x,
            y,
            fill,
            font_size,
            escape_text(content)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_is_well_formed() {
        let mut svg = SvgWriter::begin(100, 50).unwrap();
        svg.open_group("grid", None).unwrap();
        svg.line((0.0, 0.0), (100.0, 0.0), "#374151", 0.3, true).unwrap();
        svg.close_group();
        let doc = svg.finish();
        assert!(doc.starts_with("<svg"));
        assert!(doc.ends_with("</svg>"));
        assert!(doc.contains(r#"stroke-dasharray="3 3""#));
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(escape_text("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
        let mut svg = SvgWriter::begin(10, 10).unwrap();
        svg.text(5.0, 5.0, "<MA>", "#fff", 11).unwrap();
        assert!(svg.finish().contains("&lt;MA&gt;"));
    }
}
