use crate::cli::{KeypairCreateArgs, KeypairDeleteArgs, KeypairShowArgs, KeypairUpdateArgs};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::{Listing, Record, make_list_data, make_print_data};

pub(crate) async fn handle_keypair_list(ctx: &AppContext) -> CliResult<Listing> {
    let keypairs = ctx
        .keypairs
        .list(&ctx.gid)
        .await
        .map_err(CliError::failure)?;
    Ok(make_list_data(&keypairs))
}

pub(crate) async fn handle_keypair_show(
    ctx: &AppContext,
    args: KeypairShowArgs,
) -> CliResult<Record> {
    let keypair = ctx
        .keypairs
        .get(&ctx.gid, &args.keypair_id)
        .await
        .map_err(CliError::failure)?;
    Ok(make_print_data(&keypair, keypair.status.as_deref()))
}

pub(crate) async fn handle_keypair_create(
    ctx: &AppContext,
    args: KeypairCreateArgs,
) -> CliResult<Record> {
    let keypair = ctx
        .keypairs
        .create(&ctx.gid, args.name.as_deref(), args.is_default)
        .await
        .map_err(CliError::failure)?;
    Ok(make_print_data(&keypair, None))
}

pub(crate) async fn handle_keypair_update(
    ctx: &AppContext,
    args: KeypairUpdateArgs,
) -> CliResult<Record> {
    let keypair = ctx
        .keypairs
        .update(&ctx.gid, &args.keypair_id, args.is_default)
        .await
        .map_err(CliError::failure)?;
    Ok(make_print_data(&keypair, None))
}

pub(crate) async fn handle_keypair_delete(
    ctx: &AppContext,
    args: KeypairDeleteArgs,
) -> CliResult<()> {
    ctx.keypairs
        .delete(&ctx.gid, &args.keypair_id)
        .await
        .map_err(CliError::failure)
}
