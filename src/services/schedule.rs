use crate::models::{HallGroup, Schedule, ScheduleGroups};

/// Тип зала для сеансов без hallType
pub const DEFAULT_HALL_TYPE: &str = "一般廳";

/// Группирует сеансы по типу зала с меткой по умолчанию.
pub fn group_schedules_by_hall(schedules: &[Schedule]) -> ScheduleGroups {
    group_schedules_by_hall_with(schedules, DEFAULT_HALL_TYPE)
}

/// Группирует сеансы по типу зала. Группы идут в порядке первого появления,
/// внутри группы сеансы отсортированы по showTime как строки.
pub fn group_schedules_by_hall_with(schedules: &[Schedule], fallback: &str) -> ScheduleGroups {
    let mut groups: Vec<HallGroup> = Vec::new();

    for schedule in schedules {
        let key = schedule.hall_type().unwrap_or(fallback);

        match groups.iter_mut().find(|g| g.hall_type == key) {
            Some(group) => group.schedules.push(schedule.clone()),
            None => groups.push(HallGroup {
                hall_type: key.to_string(),
                schedules: vec![schedule.clone()],
            }),
        }
    }

    // Стабильная сортировка: сеансы с одинаковым временем сохраняют порядок
    for group in &mut groups {
        group.schedules.sort_by(|a, b| a.show_time.cmp(&b.show_time));
    }

    ScheduleGroups::from_groups(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn show(id: i64, hall_type: Option<&str>, time: &str) -> Schedule {
        Schedule {
            schedule_id: id,
            tmdb_id: 550,
            movie_title: "Fight Club".to_string(),
            hall_name: format!("Hall {}", id),
            hall_type: hall_type.map(str::to_string),
            show_date: "2024-01-01".to_string(),
            show_time: time.to_string(),
            price: 280.0,
            row_count: 8,
            col_count: 12,
            booked_seats: vec![],
        }
    }

    fn times(groups: &ScheduleGroups, key: &str) -> Vec<String> {
        groups
            .get(key)
            .unwrap_or_default()
            .iter()
            .map(|s| s.show_time.clone())
            .collect()
    }

    #[test]
    fn groups_by_hall_type_and_sorts_by_time() {
        let groups = group_schedules_by_hall(&[
            show(1, Some("IMAX"), "14:00"),
            show(2, Some("IMAX"), "10:00"),
            show(3, Some(""), "12:00"),
        ]);

        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["IMAX", DEFAULT_HALL_TYPE]);
        assert_eq!(times(&groups, "IMAX"), vec!["10:00", "14:00"]);
        assert_eq!(times(&groups, DEFAULT_HALL_TYPE), vec!["12:00"]);
    }

    #[test]
    fn missing_hall_type_uses_fallback() {
        let groups = group_schedules_by_hall(&[show(1, None, "09:30"), show(2, Some(""), "08:00")]);
        assert_eq!(groups.len(), 1);
        assert_eq!(times(&groups, DEFAULT_HALL_TYPE), vec!["08:00", "09:30"]);
    }

    #[test]
    fn keys_keep_first_occurrence_order() {
        let groups = group_schedules_by_hall(&[
            show(1, Some("VIP"), "20:00"),
            show(2, Some("4DX"), "11:00"),
            show(3, Some("IMAX"), "13:00"),
            show(4, Some("4DX"), "09:00"),
        ]);
        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["VIP", "4DX", "IMAX"]);
    }

    #[test]
    fn equal_times_keep_input_order() {
        let groups = group_schedules_by_hall(&[
            show(7, Some("IMAX"), "10:00"),
            show(3, Some("IMAX"), "10:00"),
        ]);
        let ids: Vec<i64> = groups.get("IMAX").unwrap().iter().map(|s| s.schedule_id).collect();
        assert_eq!(ids, vec![7, 3]);
    }

    #[test]
    fn custom_fallback_label() {
        let groups = group_schedules_by_hall_with(&[show(1, None, "10:00")], "Standard");
        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["Standard"]);
    }

    #[test]
    fn empty_input_gives_no_groups() {
        assert!(group_schedules_by_hall(&[]).is_empty());
    }

    #[test]
    fn groups_serialize_as_list() {
        let groups = group_schedules_by_hall(&[show(1, Some("IMAX"), "10:00")]);
        let json = serde_json::to_value(&groups).unwrap();
        assert_eq!(json[0]["hallType"], "IMAX");
        assert_eq!(json[0]["schedules"][0]["scheduleId"], 1);
    }

    fn arb_schedule() -> impl Strategy<Value = Schedule> {
        (
            0i64..1000,
            prop_oneof![Just(None), Just(Some("")), Just(Some("IMAX")), Just(Some("VIP"))],
            0u32..24,
            0u32..60,
        )
            .prop_map(|(id, hall, h, m)| show(id, hall, &format!("{:02}:{:02}", h, m)))
    }

    proptest! {
        #[test]
        fn grouping_keeps_every_schedule(input in proptest::collection::vec(arb_schedule(), 0..40)) {
            let groups = group_schedules_by_hall(&input);

            let mut flattened: Vec<Schedule> =
                groups.iter().flat_map(|g| g.schedules.clone()).collect();
            let mut expected = input.clone();
            let key = |s: &Schedule| (s.schedule_id, s.show_time.clone(), s.hall_type.clone());
            flattened.sort_by_key(key);
            expected.sort_by_key(key);
            prop_assert_eq!(flattened.len(), expected.len());
            for (a, b) in flattened.iter().zip(expected.iter()) {
                prop_assert_eq!(a.schedule_id, b.schedule_id);
                prop_assert_eq!(&a.show_time, &b.show_time);
                prop_assert_eq!(&a.hall_type, &b.hall_type);
            }
        }

        #[test]
        fn every_group_is_sorted_by_time(input in proptest::collection::vec(arb_schedule(), 0..40)) {
            let groups = group_schedules_by_hall(&input);
            for group in &groups {
                prop_assert!(group.schedules.windows(2).all(|w| w[0].show_time <= w[1].show_time));
            }
        }
    }
}
