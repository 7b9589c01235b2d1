use julian::{CalendarFields, JulianDate};

fn main() -> Result<(), julian::Error> {
    let now = JulianDate::now();
    println!("now: {now}");
    println!("day number: {}", now.day_number());
    println!("since noon UTC: {}", now.day_fraction_duration());
    println!("centuries since J2000: {}", now.julian_centuries().value());

    let valentines = JulianDate::from_calendar_in(
        CalendarFields::date(2010, 2, 14).at(5, 21, 0),
        "America/Los_Angeles",
    )?;
    println!("2010-02-14 05:21 in Los Angeles: {valentines}");
    println!("back to UTC: {}", valentines.to_datetime());
    Ok(())
}
