use bikeshare_rs::loader::{apply_filters, read_table};
use bikeshare_rs::report::{self, NO_DATA};
use bikeshare_rs::stats::{self, BirthYearStats, Popular};
use bikeshare_rs::{DayFilter, MonthFilter, TripTable};
use chrono::{Month, Weekday};

const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-02 09:15:00,2017-01-02 09:20:00,300,A,B,Subscriber,Male,1980.0
1,2017-03-06 08:00:00,2017-03-06 08:10:00,600,Canal St,Clark St,Subscriber,Female,1990.0
2,2017-03-06 17:30:00,2017-03-06 17:50:00,1200,Canal St,Clark St,Customer,,
3,2017-03-07 08:45:00,2017-03-07 08:52:30,450,Clark St,Canal St,Subscriber,Male,1990.0
4,2017-06-04 14:00:00,2017-06-04 14:15:00,900,Lake Shore Dr,Canal St,Customer,Female,1975.0
5,2017-03-12 08:05:00,2017-03-12 08:09:10,250,Canal St,Lake Shore Dr,Subscriber,Male,1988.0
";

const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-04-03 07:00:00,2017-04-03 07:10:10,610.5,Union Station,Dupont Circle,Registered
1,2017-04-04 18:20:00,2017-04-04 18:30:00,600.0,Dupont Circle,Union Station,Casual
";

fn chicago() -> TripTable {
    read_table(CHICAGO.as_bytes()).unwrap()
}

fn empty_chicago() -> TripTable {
    apply_filters(
        &chicago(),
        MonthFilter::Only(Month::January),
        DayFilter::Only(Weekday::Sun),
    )
}

fn render(f: impl Fn(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn time_stats_pick_the_modes() {
    let s = stats::time_stats(&chicago()).unwrap();
    assert_eq!(s.month, 3);
    assert_eq!(s.weekday, Weekday::Mon);
    assert_eq!(s.hour, 8);
}

#[test]
fn march_reports_march_as_common_month() {
    let t = apply_filters(&chicago(), MonthFilter::Only(Month::March), DayFilter::All);
    let text = render(|out| report::report_time_stats(out, &t));
    assert!(text.contains(report::TIME_HEADING));
    assert!(text.contains("The most common month is March"), "{text}");
    assert!(text.contains("This took"));
}

#[test]
fn station_ties_go_to_first_seen() {
    let s = stats::station_stats(&chicago()).unwrap();
    assert_eq!(s.start, Popular { value: "Canal St".to_string(), count: 3 });
    // Clark St and Canal St both end two trips; Clark St appears first.
    assert_eq!(s.end, Popular { value: "Clark St".to_string(), count: 2 });
    assert_eq!(s.trip.value, ("Canal St".to_string(), "Clark St".to_string()));
    assert_eq!(s.trip.count, 2);
}

#[test]
fn mode_reporters_are_deterministic() {
    let t = chicago();
    let first = (stats::time_stats(&t), stats::station_stats(&t), stats::user_stats(&t));
    for _ in 0..20 {
        let again = (stats::time_stats(&t), stats::station_stats(&t), stats::user_stats(&t));
        assert_eq!(again, first);
    }
}

#[test]
fn duration_mean_lies_between_min_and_max() {
    let d = stats::duration_stats(&chicago());
    assert_eq!(d.count, 6);
    assert_eq!(d.total, 3700.0);
    assert_eq!(d.min, Some(250.0));
    assert_eq!(d.max, Some(1200.0));
    let mean = d.mean.unwrap();
    assert!((mean - 3700.0 / 6.0).abs() < 1e-9);
    assert!(d.min.unwrap() <= mean && mean <= d.max.unwrap());

    let text = render(|out| report::render_duration_stats(out, &d));
    assert!(text.contains("Total travel time is 3,700 seconds over 6 trips"), "{text}");
}

#[test]
fn user_type_counts_cover_every_row() {
    let t = chicago();
    let u = stats::user_stats(&t);
    assert_eq!(
        u.user_types,
        vec![("Subscriber".to_string(), 4), ("Customer".to_string(), 2)]
    );
    assert_eq!(u.user_types.iter().map(|(_, n)| n).sum::<usize>(), t.len());
    assert_eq!(
        u.genders,
        vec![
            ("Male".to_string(), 3),
            ("Female".to_string(), 2),
            (stats::UNKNOWN.to_string(), 1)
        ]
    );
    assert_eq!(
        u.birth_year,
        Some(BirthYearStats {
            earliest: 1975,
            most_recent: 1990,
            most_common: 1990
        })
    );
}

#[test]
fn washington_reports_missing_demographics() {
    let t = read_table(WASHINGTON.as_bytes()).unwrap();
    let u = stats::user_stats(&t);
    assert!(u.genders.is_empty());
    assert_eq!(u.birth_year, None);

    let text = render(|out| report::report_user_stats(out, &t));
    assert!(text.contains("Registered"));
    assert!(text.contains("No gender or birth year data found"), "{text}");
    assert!(!text.contains("year of birth"));
}

#[test]
fn empty_selection_prints_no_data_everywhere() {
    let t = empty_chicago();
    assert!(stats::time_stats(&t).is_none());
    assert!(stats::station_stats(&t).is_none());
    let d = stats::duration_stats(&t);
    assert_eq!((d.count, d.total, d.mean), (0, 0.0, None));

    let text = render(|out| report::report_all(out, &t));
    for heading in [
        report::TIME_HEADING,
        report::STATION_HEADING,
        report::DURATION_HEADING,
        report::USER_HEADING,
    ] {
        assert!(text.contains(heading), "missing {heading}");
    }
    assert!(text.contains(&format!("The most common month is {NO_DATA}")));
    assert!(text.contains(&format!("The most commonly used start station is {NO_DATA}")));
    assert!(text.contains(&format!("The average travel time is {NO_DATA}")));
    assert!(text.contains(&format!("The most common year of birth is: {NO_DATA}")));
    assert_eq!(text.matches("This took").count(), 4);
}

#[test]
fn gender_without_birth_year_reports_the_missing_column() {
    let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type,Gender
2017-02-01 10:00:00,100,A,B,Subscriber,Female
2017-02-02 11:00:00,200,B,A,Customer,Male
";
    let t = read_table(csv.as_bytes()).unwrap();
    let text = render(|out| report::report_user_stats(out, &t));
    assert!(text.contains("Counts of Gender are:"), "{text}");
    assert!(text.contains("Female"));
    assert!(text.contains("No birth year data found"), "{text}");
    assert!(!text.contains("year of birth"));
    assert!(!text.contains("No gender"));
}

#[test]
fn birth_year_without_gender_reports_the_missing_column() {
    let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type,Birth Year
2017-02-01 10:00:00,100,A,B,Subscriber,1984.0
2017-02-02 11:00:00,200,B,A,Customer,1991.0
";
    let t = read_table(csv.as_bytes()).unwrap();
    let text = render(|out| report::report_user_stats(out, &t));
    assert!(text.contains("No gender data found"), "{text}");
    assert!(!text.contains("Counts of Gender"));
    assert!(text.contains("The earliest year of birth is: 1984"), "{text}");
    assert!(text.contains("The most recent year of birth is: 1991"));
    assert!(!text.contains("No birth year"));
}
