use crate::core::calculator::{mode, value_counts};
use crate::core::report::Report;
use crate::data::TripTable;
use crate::models::trip::columns;
use crate::utils::formatting::{display_width, pad_right};
use std::io::{self, Write};

/// Earliest, most recent and most common year of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYears {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Gender and birth-year statistics, when the dataset carries them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Demographics {
    /// No `Gender` column in the source (Washington)
    Unavailable,
    Available {
        genders: Vec<(String, usize)>,
        /// `None` when there is no `Birth Year` column or no value in it
        birth_years: Option<BirthYears>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub demographics: Demographics,
}

impl BirthYears {
    fn compute(table: &TripTable) -> Option<Self> {
        let years: Vec<i32> = table.trips().filter_map(|t| t.birth_year).collect();

        Some(Self {
            earliest: *years.iter().min()?,
            most_recent: *years.iter().max()?,
            most_common: mode(years.iter().copied())?,
        })
    }
}

impl Report for UserStats {
    const HEADER: &'static str = "Calculating User Stats...";

    fn compute(table: &TripTable) -> Self {
        let user_types = owned(value_counts(
            table.trips().filter_map(|t| t.user_type.as_deref()),
        ));

        // look at the schema before touching gender/birth year
        let demographics = if table.schema().has(columns::GENDER) {
            let genders = owned(value_counts(
                table.trips().filter_map(|t| t.gender.as_deref()),
            ));
            let birth_years = if table.schema().has(columns::BIRTH_YEAR) {
                BirthYears::compute(table)
            } else {
                None
            };
            Demographics::Available {
                genders,
                birth_years,
            }
        } else {
            Demographics::Unavailable
        };

        Self {
            user_types,
            demographics,
        }
    }

    fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Count of user types:")?;
        render_counts(out, &self.user_types)?;

        match &self.demographics {
            Demographics::Unavailable => {
                writeln!(out, "Sorry, no gender or date of birth data is available")?;
            }
            Demographics::Available {
                genders,
                birth_years,
            } => {
                writeln!(out, "Count of gender:")?;
                render_counts(out, genders)?;

                match birth_years {
                    Some(by) => writeln!(
                        out,
                        "Earliest year of birth is {}; Most recent year of birth is {}; Most common year of birth is {}.",
                        by.earliest, by.most_recent, by.most_common
                    )?,
                    None => writeln!(out, "Sorry, no date of birth data is available")?,
                }
            }
        }

        Ok(())
    }
}

fn owned(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts
        .into_iter()
        .map(|(k, n)| (k.to_string(), n))
        .collect()
}

fn render_counts<W: Write>(out: &mut W, counts: &[(String, usize)]) -> io::Result<()> {
    let width = counts
        .iter()
        .map(|(k, _)| display_width(k))
        .max()
        .unwrap_or(0);
    for (name, count) in counts {
        writeln!(out, "  {}  {}", pad_right(name, width), count)?;
    }
    Ok(())
}
