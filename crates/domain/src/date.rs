use chrono::prelude::*;

pub fn is_valid_date(datestr: &str) -> anyhow::Result<(i32, u32, u32)> {
    let datestr = String::from(datestr);
    let dates = datestr.split('-').collect::<Vec<_>>();
    if dates.len() != 3 {
        return Err(anyhow::Error::msg(datestr));
    }
    let year = dates[0].parse();
    let month = dates[1].parse();
    let day = dates[2].parse();

    if year.is_err() || month.is_err() || day.is_err() {
        return Err(anyhow::Error::msg(datestr));
    }

    let year = year.unwrap();
    let month = month.unwrap();
    let day = day.unwrap();
    if !(1970..=2100).contains(&year) || month < 1 || month > 12 {
        return Err(anyhow::Error::msg(datestr));
    }

    let month_length = get_month_length(year, month);

    if day < 1 || day > month_length {
        return Err(anyhow::Error::msg(datestr));
    }

    Ok((year, month, day))
}

pub fn is_valid_time(timestr: &str) -> anyhow::Result<(u32, u32)> {
    let timestr = String::from(timestr);
    let times = timestr.split(':').collect::<Vec<_>>();
    if times.len() != 2 {
        return Err(anyhow::Error::msg(timestr));
    }
    let hours = times[0].parse();
    let minutes = times[1].parse();

    if hours.is_err() || minutes.is_err() {
        return Err(anyhow::Error::msg(timestr));
    }

    let hours = hours.unwrap();
    let minutes = minutes.unwrap();
    if hours > 23 || minutes > 59 {
        return Err(anyhow::Error::msg(timestr));
    }

    Ok((hours, minutes))
}

pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

// month: January -> 1
pub fn get_month_length(year: i32, month: u32) -> u32 {
    match month - 1 {
        0 => 31,
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        2 => 31,
        3 => 30,
        4 => 31,
        5 => 30,
        6 => 31,
        7 => 31,
        8 => 30,
        9 => 31,
        10 => 30,
        11 => 31,
        _ => panic!("Invalid month"),
    }
}

/// Combines a calendar date and a wall-clock time into a single instant in
/// millis, using the local timezone of the process. No explicit timezone
/// conversion happens here.
pub fn compose_local(date: (i32, u32, u32), time: (u32, u32)) -> i64 {
    let (year, month, day) = date;
    let (hours, minutes) = time;
    Local
        .ymd(year, month, day)
        .and_hms(hours, minutes, 0)
        .timestamp_millis()
}

/// The (year, month, day) of an instant in local time
pub fn date_components(timestamp_millis: i64) -> (i32, u32, u32) {
    let datetime = Local.timestamp_millis(timestamp_millis);
    (datetime.year(), datetime.month(), datetime.day())
}

/// The (hours, minutes) of an instant in local time
pub fn time_components(timestamp_millis: i64) -> (u32, u32) {
    let datetime = Local.timestamp_millis(timestamp_millis);
    (datetime.hour(), datetime.minute())
}
