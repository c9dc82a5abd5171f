use serde::{Deserialize, Serialize};

/// Один сеанс: фильм в конкретном зале в конкретные дату и время.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub schedule_id: i64,
    pub tmdb_id: i64,
    #[serde(default)]
    pub movie_title: String,
    #[serde(default)]
    pub hall_name: String,
    #[serde(default)]
    pub hall_type: Option<String>,
    pub show_date: String, // YYYY-MM-DD
    pub show_time: String, // HH:MM
    pub price: f64,
    pub row_count: i32,
    pub col_count: i32,
    #[serde(default)]
    pub booked_seats: Vec<String>, // ["A1", "B5"]
}

impl Schedule {
    /// Тип зала, если он задан и не пустой
    pub fn hall_type(&self) -> Option<&str> {
        self.hall_type.as_deref().filter(|t| !t.is_empty())
    }

    /// Количество мест в зале; для некорректных размеров 0
    pub fn capacity(&self) -> usize {
        if self.row_count <= 0 || self.col_count <= 0 {
            return 0;
        }
        (self.row_count as usize)
            .checked_mul(self.col_count as usize)
            .unwrap_or(0)
    }
}

/// Группа сеансов одного типа зала, отсортированная по времени.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HallGroup {
    pub hall_type: String,
    pub schedules: Vec<Schedule>,
}

/// Сеансы, сгруппированные по типу зала. Порядок групп совпадает
/// с порядком первого появления типа зала во входном списке.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScheduleGroups {
    groups: Vec<HallGroup>,
}

impl ScheduleGroups {
    pub(crate) fn from_groups(groups: Vec<HallGroup>) -> Self {
        Self { groups }
    }

    pub fn get(&self, hall_type: &str) -> Option<&[Schedule]> {
        self.groups
            .iter()
            .find(|g| g.hall_type == hall_type)
            .map(|g| g.schedules.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.hall_type.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HallGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn into_inner(self) -> Vec<HallGroup> {
        self.groups
    }
}

impl<'a> IntoIterator for &'a ScheduleGroups {
    type Item = &'a HallGroup;
    type IntoIter = std::slice::Iter<'a, HallGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Дата, доступная для выбора в форме бронирования.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOption {
    pub value: String, // 2024-01-05
    pub label: String, // 1/5
    pub day: String,
}
