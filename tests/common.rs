#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const STATION_A: &str = "Clinton St & Washington Blvd";
pub const STATION_B: &str = "Streeter Dr & Grand Ave";
pub const STATION_C: &str = "Lake Shore Dr & Monroe St";

/// Seven trips, January to June, with gender and birth year.
/// Modes: month 1, Monday, hour 8, start A, end B, trip A→B, birth year 1990.
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1001,2017-01-02 08:05:00,2017-01-02 08:06:00,60,Clinton St & Washington Blvd,Streeter Dr & Grand Ave,Subscriber,Male,1990.0
1002,2017-01-02 08:30:00,2017-01-02 08:32:00,120,Clinton St & Washington Blvd,Streeter Dr & Grand Ave,Subscriber,Female,1985.0
1003,2017-01-03 09:10:00,2017-01-03 09:13:00,180,Streeter Dr & Grand Ave,Lake Shore Dr & Monroe St,Customer,,
1004,2017-02-06 17:45:00,2017-02-06 17:49:00,240,Lake Shore Dr & Monroe St,Clinton St & Washington Blvd,Subscriber,Male,1990.0
1005,2017-03-15 12:00:00,2017-03-15 12:05:00,300,Clinton St & Washington Blvd,Lake Shore Dr & Monroe St,Subscriber,Male,1970.0
1006,2017-06-30 23:59:59,2017-07-01 00:05:59,360,Lake Shore Dr & Monroe St,Streeter Dr & Grand Ave,Customer,Female,2001.0
1007,2017-06-05 07:00:00,2017-06-05 07:07:00,420,Streeter Dr & Grand Ave,Clinton St & Washington Blvd,Subscriber,Male,1990.0
";

pub const NEW_YORK_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
5688089,2017-04-10 18:40:31,2017-04-10 18:53:36,785,Broadway & W 60 St,9 Ave & W 45 St,Subscriber,Female,1998.0
4096714,2017-05-21 11:20:21,2017-05-21 11:36:07,946,E 12 St & 3 Ave,E 5 St & Avenue C,Customer,,
2173887,2017-04-10 18:05:00,2017-04-10 18:15:00,600,Broadway & W 60 St,9 Ave & W 45 St,Subscriber,Male,1968.0
";

/// Washington shape: no Gender / Birth Year columns.
/// Two Monday-January-08h trips and one Tuesday-February-09h trip.
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-01-02 08:05:00,2017-01-02 08:06:00,60,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-01-02 08:40:00,2017-01-02 08:42:00,120,14th & Belmont St NW,15th & K St NW,Subscriber
1330037,2017-02-07 09:15:00,2017-02-07 09:18:00,180,Lincoln Memorial,Jefferson Dr & 14th St SW,Customer
";

pub fn rbs() -> Command {
    cargo_bin_cmd!("rbikeshare")
}

/// Fresh directory in the system temp dir (removed first if present)
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rbikeshare", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Temp data dir holding the three city datasets
pub fn setup_data_dir(name: &str) -> String {
    let dir = temp_dir(name);
    fs::write(dir.join("chicago.csv"), CHICAGO_CSV).expect("write chicago.csv");
    fs::write(dir.join("new_york_city.csv"), NEW_YORK_CSV).expect("write new_york_city.csv");
    fs::write(dir.join("washington.csv"), WASHINGTON_CSV).expect("write washington.csv");
    dir.to_string_lossy().to_string()
}

/// Join scripted answers into stdin content, one per line
pub fn answers(lines: &[&str]) -> String {
    let mut s = lines.join("\n");
    s.push('\n');
    s
}
