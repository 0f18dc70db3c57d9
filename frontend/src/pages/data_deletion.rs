use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::pages::legal::{
    bullets, labeled_bullets, lead, para, Callout, CalloutTone, ContactCard, LegalPage, Section,
    LINK,
};
use crate::Route;

/// Keyword that starts a deletion request over WhatsApp.
pub const WHATSAPP_KEYWORD: &str = "ELIMINAR MIS DATOS";
pub const EMAIL_SUBJECT: &str = "Solicitud de Eliminación de Datos";

#[function_component(DataDeletion)]
pub fn data_deletion() -> Html {
    html! {
        <LegalPage title="Instrucciones para Eliminación de Datos">
            <Section title="Tu Derecho a la Eliminación de Datos">
                { para("En Macch respetamos tu privacidad y tu derecho a controlar tus datos personales. Puedes solicitar la eliminación de todos los datos que hemos recopilado sobre ti en cualquier momento.") }
            </Section>

            <Section title="¿Qué datos eliminamos?">
                { lead("Al procesar tu solicitud de eliminación, borraremos:") }
                { bullets(&[
                    "Tu número de teléfono y datos de perfil de WhatsApp",
                    "Historial completo de conversaciones",
                    "Información de consultas y reclamos",
                    "Cualquier dato personal asociado a tu cuenta",
                    "Registros de interacción con el servicio",
                ]) }
            </Section>

            <Section title="Cómo Solicitar la Eliminación">
                <Callout tone={CalloutTone::Choice} title="Opción 1: Por Email">
                    <ol class="text-gray-400 leading-relaxed space-y-3 list-decimal list-inside">
                        <li>
                            {"Envía un correo electrónico a "}
                            <a href={format!("mailto:{}", config::PRIVACY_EMAIL)} class={LINK}>{ config::PRIVACY_EMAIL }</a>
                        </li>
                        <li>{ format!("En el asunto escribe: \"{}\"", EMAIL_SUBJECT) }</li>
                        <li>
                            {"Incluye en el mensaje:"}
                            <ul class="ml-6 mt-2 space-y-1 list-disc list-inside">
                                <li>{"Tu número de teléfono de WhatsApp (con código de país)"}</li>
                                <li>{"Nombre de la empresa con la que te comunicaste"}</li>
                                <li>{"Confirmación de que deseas eliminar todos tus datos"}</li>
                            </ul>
                        </li>
                        <li>{"Recibirás una confirmación de recepción en 48 horas"}</li>
                    </ol>
                </Callout>

                <Callout tone={CalloutTone::Choice} title="Opción 2: Por WhatsApp">
                    <ol class="text-gray-400 leading-relaxed space-y-3 list-decimal list-inside">
                        <li>{"Envía un mensaje al mismo número de WhatsApp donde usaste el servicio"}</li>
                        <li>{ format!("Escribe: \"{}\"", WHATSAPP_KEYWORD) }</li>
                        <li>{"Confirma tu solicitud cuando el sistema te lo pida"}</li>
                    </ol>
                </Callout>
            </Section>

            <Section title="Plazos de Procesamiento">
                <Callout title="Tiempos estimados:">
                    { labeled_bullets(&[
                        ("Confirmación de recepción", "48 horas hábiles"),
                        ("Procesamiento de eliminación", "hasta 30 días"),
                        ("Confirmación de eliminación", "por email una vez completada"),
                    ]) }
                </Callout>
            </Section>

            <Section title="Información Importante">
                { lead("Ten en cuenta que:") }
                { labeled_bullets(&[
                    ("Datos retenidos por obligación legal", "Algunos datos pueden ser retenidos por períodos adicionales si es requerido por ley o para proteger nuestros derechos legales."),
                    ("Datos con tu proveedor", "La eliminación de datos en Macch no afecta los datos que tu proveedor de servicios tenga sobre ti. Deberás contactarlos directamente para gestionar esos datos."),
                    ("Datos anonimizados", "Los datos que ya han sido anonimizados y utilizados para análisis agregados no pueden ser eliminados ya que no están vinculados a tu identidad."),
                    ("Copias de seguridad", "Los datos en copias de seguridad se eliminarán en el siguiente ciclo de rotación (máximo 90 días)."),
                ]) }
            </Section>

            <Section title="Verificación de Identidad">
                { lead("Para proteger tu privacidad, podemos solicitar verificación de identidad antes de procesar tu solicitud. Esto puede incluir:") }
                { bullets(&[
                    "Confirmación desde el número de WhatsApp registrado",
                    "Respuesta a preguntas de seguridad basadas en tu historial de interacciones",
                ]) }
            </Section>

            <Section title="Contacto">
                <ContactCard
                    intro="Para solicitudes de eliminación de datos o consultas relacionadas:"
                    email={config::PRIVACY_EMAIL}
                >
                    <p class="text-gray-400 leading-relaxed">
                        {"Para más información sobre cómo manejamos tus datos, consulta nuestra "}
                        <Link<Route> to={Route::Privacy} classes={LINK}>{"Política de Privacidad"}</Link<Route>>
                        {"."}
                    </p>
                </ContactCard>
            </Section>
        </LegalPage>
    }
}
