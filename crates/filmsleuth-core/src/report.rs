/// Report rendering and export.
///
/// A [`Report`] is a snapshot of every analysis view, built once from a
/// [`Session`]. It renders to any `io::Write` sink. Console output and file
/// export both go through [`Report::render`], so the body text is identical
/// no matter where it ends up.
use crate::analysis::{DecadeStats, DirectorStats, Statistics};
use crate::config::AnalysisConfig;
use crate::error::ExportError;
use crate::model::format::{format_average, format_rating, rule};
use crate::model::{Record, Session};
use chrono::{DateTime, Local};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

const RANKING_RULE: usize = 50;
const STATISTICS_RULE: usize = 30;
const DIRECTORS_RULE: usize = 40;
const DECADES_RULE: usize = 25;
const EXPORT_HEADER_RULE: usize = 60;

/// Default file name offered for exports.
pub const DEFAULT_EXPORT_FILE: &str = "movie_analysis.txt";

/// All four analysis views, owned so the report outlives the session borrow.
#[derive(Debug, Clone)]
pub struct Report {
    pub ranking: Vec<Record>,
    pub statistics: Option<Statistics>,
    pub directors: Vec<DirectorStats>,
    pub decades: Vec<DecadeStats>,
    /// Threshold used for `directors`, shown in the section title.
    pub min_director_movies: usize,
}

impl Report {
    /// Compute every view from the session.
    pub fn build(session: &Session, config: &AnalysisConfig) -> Self {
        Self {
            ranking: session
                .rank(config.top_count)
                .into_iter()
                .cloned()
                .collect(),
            statistics: session.statistics(),
            directors: session.directors(config),
            decades: session.decades(),
            min_director_movies: config.min_director_movies,
        }
    }

    /// Write the report body to `out`.
    ///
    /// Section order is fixed: ranking, statistics, directors, decades.
    /// The director and decade sections are omitted when they have no rows.
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        self.render_ranking(out)?;
        writeln!(out)?;
        self.render_statistics(out)?;

        if !self.directors.is_empty() {
            writeln!(out)?;
            self.render_directors(out)?;
        }
        if !self.decades.is_empty() {
            writeln!(out)?;
            self.render_decades(out)?;
        }
        Ok(())
    }

    /// Render into a `String`.
    pub fn render_to_string(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.render(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Write the report to `path`, preceded by a timestamped header.
    ///
    /// On failure the report itself is untouched and can still be rendered
    /// elsewhere.
    pub fn export(&self, path: &Path) -> Result<(), ExportError> {
        let file = File::create(path).map_err(|source| ExportError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        let mut out = BufWriter::new(file);

        self.export_to(&mut out, Local::now())
            .and_then(|()| out.flush())
            .map_err(|source| ExportError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        info!("Analysis exported to {}", path.display());
        Ok(())
    }

    /// Write the export header followed by the regular report body.
    pub fn export_to<W: Write + ?Sized>(
        &self,
        out: &mut W,
        generated_at: DateTime<Local>,
    ) -> io::Result<()> {
        writeln!(
            out,
            "Movie Analysis Report - Generated on {}",
            generated_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(out, "{}", rule(EXPORT_HEADER_RULE))?;
        writeln!(out)?;
        self.render(out)
    }

    // ── Sections ─────────────────────────────────────────────────────────

    fn render_ranking<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Top {} Rated Movies:", self.ranking.len())?;
        writeln!(out, "{}", rule(RANKING_RULE))?;
        for (i, record) in self.ranking.iter().enumerate() {
            writeln!(out, "{:2}. {record}", i + 1)?;
        }
        Ok(())
    }

    fn render_statistics<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Statistics:")?;
        writeln!(out, "{}", rule(STATISTICS_RULE))?;
        let Some(stats) = &self.statistics else {
            return writeln!(out, "No data available.");
        };
        writeln!(out, "Total Movies: {}", stats.count)?;
        writeln!(out, "Average Rating: {}/10", format_average(stats.mean_rating))?;
        writeln!(
            out,
            "Rating Range: {} - {}",
            format_rating(stats.min_rating),
            format_rating(stats.max_rating)
        )?;
        writeln!(out, "Year Range: {} - {}", stats.min_year, stats.max_year)
    }

    fn render_directors<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "Top Directors ({}+ movies):",
            self.min_director_movies
        )?;
        writeln!(out, "{}", rule(DIRECTORS_RULE))?;
        for d in &self.directors {
            writeln!(
                out,
                "{}: {} avg ({} movies)",
                d.director,
                format_average(d.mean_rating),
                d.count
            )?;
        }
        Ok(())
    }

    fn render_decades<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Movies by Decade:")?;
        writeln!(out, "{}", rule(DECADES_RULE))?;
        for d in &self.decades {
            writeln!(
                out,
                "{}: {} movies, {} avg rating",
                d.label(),
                d.count,
                format_average(d.mean_rating)
            )?;
        }
        Ok(())
    }
}
