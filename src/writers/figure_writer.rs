use crate::error::{MapError, Result};
use crate::models::{Figure, Frame};
use crate::utils::constants::{FORMAT_HTML, FORMAT_JSON, PLOTLY_CDN_URL};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Html => FORMAT_HTML,
            OutputFormat::Json => FORMAT_JSON,
        }
    }
}

pub struct FigureWriter {
    format: OutputFormat,
    pretty: bool,
}

impl FigureWriter {
    pub fn new() -> Self {
        Self {
            format: OutputFormat::Html,
            pretty: false,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Write the figure, mounting it at `div_id` when writing HTML
    pub fn write_figure(&self, figure: &Figure, div_id: &str, path: &Path) -> Result<()> {
        let contents = match self.format {
            OutputFormat::Json => self.to_json(figure)?,
            OutputFormat::Html => self.render_html(figure, div_id)?,
        };

        write_output(path, contents.as_bytes())?;
        tracing::info!(path = %path.display(), format = ?self.format, "Wrote figure");
        Ok(())
    }

    /// Write bare frames as a JSON array
    pub fn write_frames(&self, frames: &[Frame], path: &Path) -> Result<()> {
        let contents = if self.pretty {
            serde_json::to_string_pretty(frames)?
        } else {
            serde_json::to_string(frames)?
        };

        write_output(path, contents.as_bytes())?;
        tracing::info!(path = %path.display(), frames = frames.len(), "Wrote frames");
        Ok(())
    }

    pub fn to_json(&self, figure: &Figure) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(figure)?
        } else {
            serde_json::to_string(figure)?
        };
        Ok(json)
    }

    /// Standalone page: creates the plot, then attaches the frames once it exists.
    pub fn render_html(&self, figure: &Figure, div_id: &str) -> Result<String> {
        if div_id.is_empty() || div_id.contains(['"', '\'', '<', '>', '&']) {
            return Err(MapError::InvalidFormat(format!(
                "Mount id '{}' is not usable as an element id",
                div_id
            )));
        }

        let data = script_safe(&serde_json::to_string(&figure.data)?);
        let layout = script_safe(&serde_json::to_string(&figure.layout)?);
        let frames = script_safe(&serde_json::to_string(&figure.frames)?);

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{div_id}</title>
<script src="{cdn}"></script>
</head>
<body>
<div id="{div_id}"></div>
<script>
(function () {{
  var data = {data};
  var layout = {layout};
  var frames = {frames};
  Plotly.newPlot("{div_id}", data, layout)
    .then(function () {{ return Plotly.addFrames("{div_id}", frames); }});
}})();
</script>
</body>
</html>
"#,
            div_id = div_id,
            cdn = PLOTLY_CDN_URL,
            data = data,
            layout = layout,
            frames = frames,
        ))
    }
}

impl Default for FigureWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Labels carry markup, so a literal `</script>` inside the JSON would end the block early.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents)?;
    writer.flush()?;
    Ok(())
}
