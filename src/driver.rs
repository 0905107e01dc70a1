use log::{debug, info};
use postgres::NoTls;

use crate::error::MigrateError;
use crate::target::ConnectionTarget;

/// Applies the SQL batch over a direct driver connection.
///
/// The whole script runs as one simple-query batch. Transactional behavior
/// comes from the script's own BEGIN/COMMIT bracketing; a mid-batch failure
/// leaves the transaction rolled back by the server when the connection
/// drops. The connection is released when the client goes out of scope.
pub fn apply(target: &ConnectionTarget, sql: &str) -> Result<(), MigrateError> {
    debug!("Connecting with native driver to {target}");
    let mut client = target.to_pg_config().connect(NoTls)?;

    client.batch_execute(sql)?;
    info!("SQL batch applied to {target}");
    Ok(())
}
