//! Table columns and the typed accessor table used for sorting.

use crate::country::Country;

/// A record field the table can sort by.
///
/// Each variant owns a typed accessor, so resolving a sort key can never
/// fail on a missing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Code,
    Name,
    ContinentName,
}

impl SortField {
    /// Sort key of `country` for this field.
    pub fn key(self, country: &Country) -> &str {
        match self {
            SortField::Code => &country.code,
            SortField::Name => &country.name,
            SortField::ContinentName => country.continent_name(),
        }
    }

    /// Dotted field path, as written in the GraphQL selection.
    pub fn path(self) -> &'static str {
        match self {
            SortField::Code => "code",
            SortField::Name => "name",
            SortField::ContinentName => "continent.name",
        }
    }
}

/// Header cells in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Column {
    #[default]
    Code,
    Name,
    Flag,
    Continent,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::Code, Column::Name, Column::Flag, Column::Continent];

    pub fn label(self) -> &'static str {
        match self {
            Column::Code => "ISO Code",
            Column::Name => "Country Name",
            Column::Flag => "Country flag",
            Column::Continent => "Continent",
        }
    }

    /// `None` marks the column as not sortable.
    pub fn sort_field(self) -> Option<SortField> {
        match self {
            Column::Code => Some(SortField::Code),
            Column::Name => Some(SortField::Name),
            Column::Flag => None,
            Column::Continent => Some(SortField::ContinentName),
        }
    }

    pub fn index(self) -> usize {
        match self {
            Column::Code => 0,
            Column::Name => 1,
            Column::Flag => 2,
            Column::Continent => 3,
        }
    }

    /// Next column, wrapping after the last.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous column, wrapping before the first.
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
