//! Built-in mapping data for Forge 1.8.9 → EaglerForge ModAPI

use crate::events::EventCategory;
use crate::modules::ModuleId;

/// Source expressions and the ModAPI expression they become.
///
/// Applied top to bottom as literal substring replacements. An entry must
/// never be a substring of a later one, or it would corrupt it first; the
/// table tests enforce this.
pub static CLASS_MAPPINGS: &[(&str, &str)] = &[
    ("net.minecraft.client.Minecraft.getMinecraft().thePlayer", "ModAPI.player"),
    ("net.minecraft.client.Minecraft.getMinecraft().theWorld", "ModAPI.world"),
    ("net.minecraft.client.Minecraft.getMinecraft()", "ModAPI.minecraft"),
    ("new ScaledResolution(Minecraft.getMinecraft())", "ModAPI.resolution"),
    ("new ScaledResolution(mc)", "ModAPI.resolution"),
    ("Minecraft.getMinecraft().thePlayer.sendQueue", "ModAPI.network"),
    ("Minecraft.getMinecraft().thePlayer", "ModAPI.player"),
    ("Minecraft.getMinecraft().theWorld", "ModAPI.world"),
    ("Minecraft.getMinecraft().gameSettings", "ModAPI.settings"),
    ("Minecraft.getMinecraft().getNetHandler()", "ModAPI.network"),
    ("Minecraft.getMinecraft()", "ModAPI.minecraft"),
    ("mc.thePlayer.sendQueue", "ModAPI.network"),
    ("mc.thePlayer", "ModAPI.player"),
    ("mc.theWorld", "ModAPI.world"),
    ("mc.gameSettings", "ModAPI.settings"),
    ("mc.getNetHandler()", "ModAPI.network"),
    ("org.lwjgl.input.Keyboard", "ModAPI.keyboard"),
    ("Keyboard.", "ModAPI.keyboard."),
    ("EnumChatFormatting.BLACK", "\"\u{a7}0\""),
    ("EnumChatFormatting.DARK_BLUE", "\"\u{a7}1\""),
    ("EnumChatFormatting.DARK_GREEN", "\"\u{a7}2\""),
    ("EnumChatFormatting.DARK_AQUA", "\"\u{a7}3\""),
    ("EnumChatFormatting.DARK_RED", "\"\u{a7}4\""),
    ("EnumChatFormatting.DARK_PURPLE", "\"\u{a7}5\""),
    ("EnumChatFormatting.GOLD", "\"\u{a7}6\""),
    ("EnumChatFormatting.GRAY", "\"\u{a7}7\""),
    ("EnumChatFormatting.DARK_GRAY", "\"\u{a7}8\""),
    ("EnumChatFormatting.BLUE", "\"\u{a7}9\""),
    ("EnumChatFormatting.GREEN", "\"\u{a7}a\""),
    ("EnumChatFormatting.AQUA", "\"\u{a7}b\""),
    ("EnumChatFormatting.RED", "\"\u{a7}c\""),
    ("EnumChatFormatting.LIGHT_PURPLE", "\"\u{a7}d\""),
    ("EnumChatFormatting.YELLOW", "\"\u{a7}e\""),
    ("EnumChatFormatting.WHITE", "\"\u{a7}f\""),
    ("EnumChatFormatting.BOLD", "\"\u{a7}l\""),
    ("EnumChatFormatting.ITALIC", "\"\u{a7}o\""),
    ("EnumChatFormatting.RESET", "\"\u{a7}r\""),
];

/// Method renames, applied as `.<from>(` → `.<to>(`
pub static METHOD_MAPPINGS: &[(&str, &str)] = &[
    ("addChatComponentMessage", "addChatMessage"),
    ("getCurrentEquippedItem", "getHeldItem"),
    ("getCommandSenderName", "getName"),
    ("getDisplayName", "getName"),
    ("getUnformattedText", "getText"),
    ("getFormattedText", "getText"),
    ("getPositionVector", "getPosition"),
    ("getDistanceToEntity", "getDistance"),
    ("getBlockState", "getBlock"),
    ("getStringWidth", "getWidth"),
    ("drawStringWithShadow", "drawString"),
    ("isKeyDown", "isPressed"),
    ("sendChatMessage", "sendChat"),
];

/// Event types with a known category. Checked before any heuristic.
pub static EVENT_MAPPINGS: &[(&str, EventCategory)] = &[
    ("TickEvent.ClientTickEvent", EventCategory::Tick),
    ("TickEvent.PlayerTickEvent", EventCategory::Tick),
    ("TickEvent.ServerTickEvent", EventCategory::Tick),
    ("TickEvent.WorldTickEvent", EventCategory::Tick),
    ("TickEvent.RenderTickEvent", EventCategory::Frame),
    ("ClientTickEvent", EventCategory::Tick),
    ("RenderTickEvent", EventCategory::Frame),
    ("RenderGameOverlayEvent", EventCategory::Render),
    ("RenderGameOverlayEvent.Pre", EventCategory::Render),
    ("RenderGameOverlayEvent.Post", EventCategory::Render),
    ("RenderGameOverlayEvent.Text", EventCategory::Render),
    ("RenderWorldLastEvent", EventCategory::Render),
    ("ClientChatReceivedEvent", EventCategory::ReceiveChatMessage),
    ("ServerChatEvent", EventCategory::SendChatMessage),
    ("CommandEvent", EventCategory::ProcessCommand),
    ("FMLConstructionEvent", EventCategory::Bootstrap),
    ("FMLPreInitializationEvent", EventCategory::Bootstrap),
    ("FMLInitializationEvent", EventCategory::Load),
    ("FMLPostInitializationEvent", EventCategory::Load),
    ("FMLLoadCompleteEvent", EventCategory::Load),
    ("FMLServerStartingEvent", EventCategory::ServerStart),
    ("FMLServerStartedEvent", EventCategory::ServerStart),
    ("FMLServerStoppingEvent", EventCategory::ServerStop),
    ("FMLServerStoppedEvent", EventCategory::ServerStop),
    ("PlayerEvent.PlayerLoggedInEvent", EventCategory::Load),
    ("WorldEvent.Load", EventCategory::Load),
];

/// Literal triggers per module, in the order `require` lines are emitted
pub static MODULE_TRIGGERS: &[(ModuleId, &[&str])] = &[
    (ModuleId::Player, &["thePlayer", "EntityPlayerSP"]),
    (ModuleId::World, &["theWorld", "WorldClient"]),
    (ModuleId::Network, &["sendQueue", "getNetHandler", "NetHandlerPlayClient", "addToSendQueue"]),
    (ModuleId::Resolution, &["ScaledResolution"]),
    (ModuleId::Settings, &["gameSettings", "GameSettings"]),
    (ModuleId::Server, &["MinecraftServer", "FMLServerStartingEvent"]),
];
