pub fn init_logger(
    min_level: log::LevelFilter, log_file_name: &std::ffi::OsStr,
) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            // Local time only works in single-threaded processes, so the
            // log timestamps stay UTC.
            let now = time::OffsetDateTime::now_utc();

            out.finish(format_args!(
                "{} - {} - {} - {}",
                now.format(&time::macros::format_description!(
                    "[year]-[month]-[day] [hour]:[minute]:[second],[subsecond digits:3]"
                ))
                .unwrap(),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(min_level)
        .chain(fern::log_file(log_file_name)?)
        .apply()?;

    Ok(())
}
